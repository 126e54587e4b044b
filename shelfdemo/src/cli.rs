//! Command-line interface definition and parsing.
//!
//! This module defines the command-line arguments accepted by the application
//! and provides parsing functionality using the clap crate.

use crate::View;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

/// Command-line arguments for the storefront demo.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// What to do with the product cache.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// This method parses the command-line arguments according to the defined
    /// structure, including validation and help text generation.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// The operations exposed to the command line.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every cached product
    List,

    /// Show one of the storefront views
    View {
        /// The view to render
        #[arg(value_enum)]
        view: View,
    },

    /// List products in a category (exact, case-sensitive match)
    Category {
        /// The category name
        name: String,
    },

    /// List products rated at least this value
    Rating {
        /// The minimum rating
        #[arg(allow_negative_numbers = true)]
        min: f64,
    },

    /// Add a product and write it to the store
    Add {
        /// The product id (a random one is generated if omitted)
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        product: ProductArgs,
    },

    /// Merge new fields onto an existing product
    Update {
        /// The product id
        id: String,

        #[command(flatten)]
        product: ProductArgs,
    },

    /// Delete a product
    Delete {
        /// The product id
        id: String,
    },
}

/// The fields of a product given on the command line.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// The product category
    #[arg(long)]
    pub category: String,

    /// The product rating
    #[arg(long, allow_negative_numbers = true)]
    pub rating: f64,

    /// Additional fields as `key=value`; values that parse as JSON are kept as such
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, Value)>,
}

fn parse_field(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("missing field name in `{raw}`"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.to_owned(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_prefer_json_values() {
        assert_eq!(parse_field("price=12.5"), Ok(("price".to_owned(), json!(12.5))));
        assert_eq!(parse_field("name=Rain jacket"), Ok(("name".to_owned(), json!("Rain jacket"))));
        assert_eq!(parse_field("tags=[\"new\"]"), Ok(("tags".to_owned(), json!(["new"]))));
        assert!(parse_field("no-separator").is_err());
        assert!(parse_field("=value").is_err());
    }

    #[test]
    fn update_parses_repeated_fields() {
        let cli = Cli::try_parse_from([
            "shelfdemo",
            "update",
            "clothing-tee",
            "--category",
            "clothing",
            "--rating",
            "4",
            "--field",
            "price=15",
            "--field",
            "name=Tee",
        ])
        .unwrap();

        let Commands::Update { id, product } = cli.command else {
            panic!("expected update");
        };
        assert_eq!(id, "clothing-tee");
        assert_eq!(product.rating, 4.0);
        assert_eq!(product.fields.len(), 2);
    }

    #[test]
    fn views_parse_by_name() {
        let cli = Cli::try_parse_from(["shelfdemo", "view", "bestseller"]).unwrap();
        assert!(matches!(cli.command, Commands::View { view: View::Bestseller }));
    }
}
