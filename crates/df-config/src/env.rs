use regex::{Captures, Regex};
use std::env;

use crate::ConfigError;

/// Replace every `${VAR_NAME}` reference with the value of that environment
/// variable. Unset variables are collected and reported together.
pub fn interpolate_env(input: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();

    let mut missing = Vec::new();
    let result = re.replace_all(input, |caps: &Captures| {
        let var_name = &caps[1];
        match env::var(var_name) {
            Ok(value) => value,
            Err(_) => {
                missing.push(var_name.to_string());
                String::new()
            }
        }
    });

    if !missing.is_empty() {
        return Err(ConfigError::MissingEnvVars(missing));
    }

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_env() {
        env::set_var("DF_TEST_VAR", "hello");
        env::set_var("DF_ANOTHER_VAR", "world");

        let input = "prefix ${DF_TEST_VAR} middle ${DF_ANOTHER_VAR} suffix";
        let result = interpolate_env(input).unwrap();
        assert_eq!(result, "prefix hello middle world suffix");
    }

    #[test]
    fn test_interpolate_env_missing() {
        let input = "prefix ${DF_MISSING_VAR_12345} suffix";
        let result = interpolate_env(input);
        match result {
            Err(ConfigError::MissingEnvVars(vars)) => {
                assert_eq!(vars, vec!["DF_MISSING_VAR_12345"]);
            }
            _ => panic!("Expected MissingEnvVars error"),
        }
    }

    #[test]
    fn test_interpolate_env_no_vars() {
        let input = "no variables here";
        let result = interpolate_env(input).unwrap();
        assert_eq!(result, "no variables here");
    }

    #[test]
    fn test_interpolate_env_multiple_same_var() {
        env::set_var("DF_REPEAT_VAR", "value");
        let input = "${DF_REPEAT_VAR} and ${DF_REPEAT_VAR} again";
        let result = interpolate_env(input).unwrap();
        assert_eq!(result, "value and value again");
    }

    #[test]
    fn test_interpolate_env_partial_syntax_not_matched() {
        // Single $ without braces should not be matched
        let input = "not a $VAR variable";
        let result = interpolate_env(input).unwrap();
        assert_eq!(result, "not a $VAR variable");
    }

    #[test]
    fn test_interpolate_env_in_yaml_context() {
        env::set_var("DF_YAML_TOKEN", "jwt-abc");
        let input = "token: ${DF_YAML_TOKEN}";
        let result = interpolate_env(input).unwrap();
        assert_eq!(result, "token: jwt-abc");
    }
}
