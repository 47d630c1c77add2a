use models::Catalog;
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(unused)]
pub const OFFICERS_JSON: &str = include_str!("officers.json");

lazy_static::lazy_static! {
    #[allow(unused)]
    pub static ref CATALOG: Catalog = Catalog::from_json_str(OFFICERS_JSON).unwrap();
}

#[allow(unused)]
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
