use regex::Regex;

lazy_static::lazy_static! {
    pub static ref NON_NUMERIC_REGEX: Regex = Regex::new(r"[^0-9.]").unwrap();
    pub static ref LEADING_NUMBER_REGEX: Regex = Regex::new(r"^\s*[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)").unwrap();
    pub static ref LABELLED_ROW_REGEX: Regex = Regex::new(r"^([A-Za-z\s]+?)\s+([0-9][0-9.%/]*)").unwrap();
    pub static ref PERCENT_TOKEN_REGEX: Regex = Regex::new(r"[0-9]+(?:\.[0-9]+)?%").unwrap();
    pub static ref BARE_TOKEN_REGEX: Regex = Regex::new(r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?-u:\b)").unwrap();
}
