//! Fixtures
//!
//! Cart snapshots stored as YAML under `<base>/carts/<name>.yml`, in the same shape as the
//! host's input document.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::cart::FunctionInput;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a cart snapshot from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cart(&self, name: &str) -> Result<FunctionInput, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Ok(serde_norway::from_str(&contents)?)
    }

    /// Load a cart snapshot from the default fixture directory
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn cart(name: &str) -> Result<FunctionInput, FixtureError> {
        Self::new().load_cart(name)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, write};

    use testresult::TestResult;

    use crate::cart::{Cart, CartLine};

    use super::*;

    #[test]
    fn load_cart_reads_yaml() -> TestResult {
        let dir = tempfile::tempdir()?;

        create_dir_all(dir.path().join("carts"))?;

        write(
            dir.path().join("carts").join("simple.yml"),
            "cart:\n  lines:\n    - id: h\n      quantity: 4\n      merchandise:\n        __typename: ProductVariant\n        product:\n          productType: Honey\n    - id: g\n      quantity: 1\n      merchandise:\n        __typename: CustomProduct\n",
        )?;

        let input = Fixture::with_base_path(dir.path()).load_cart("simple")?;

        assert_eq!(
            input,
            FunctionInput::with_cart(Cart::with_lines([
                CartLine::product("h", 4, "Honey"),
                CartLine::other("g", 1),
            ]))
        );

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        let result = Fixture::with_base_path(dir.path()).load_cart("missing");

        assert!(matches!(result, Err(FixtureError::Io(_))));

        Ok(())
    }

    #[test]
    fn invalid_yaml_is_yaml_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        create_dir_all(dir.path().join("carts"))?;
        write(dir.path().join("carts").join("bad.yml"), "cart: [unclosed")?;

        let result = Fixture::with_base_path(dir.path()).load_cart("bad");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));

        Ok(())
    }
}
