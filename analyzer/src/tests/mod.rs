#[cfg(test)]
pub(crate) mod common;
#[cfg(test)]
mod test_api_parse;
#[cfg(test)]
mod test_api_table;
