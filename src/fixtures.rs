#[cfg(test)]
pub mod test {
    use crate::settings::Settings;
    use crate::value::Value;

    /// A small config exercising spacing, separators, comments and quoting.
    pub const SAMPLE_CONF: &str = "\
# Sample server config
listen 8080
  host = example.org
#timeout 30
debug: false

motd 'hello there'
";

    pub fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Build a desired-values map. `None` entries mean "unset".
    pub fn desired(pairs: &[(&str, Option<Value>)]) -> Settings {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    pub fn num(n: f64) -> Option<Value> {
        Some(Value::Number(n))
    }

    #[test]
    fn sample_conf_ends_with_newline() {
        assert!(SAMPLE_CONF.ends_with('\n'));
        assert_eq!(SAMPLE_CONF.lines().count(), 7);
    }
}
