//! Command implementations.
//!
//! Each command works on already-read file contents so it can be tested
//! without touching the filesystem.

use anyhow::Context;
use segment_filter::wire::{self, WireFilter};
use segment_filter::{
    DimensionCatalog, FilterLimits, OperatorLabels, Summarizer, Tree, ValidationReport, Validator,
};

use crate::TRACING_TARGET;
use crate::config::OutputFormat;

/// Parses a wire-format filter and rebuilds its tree.
pub fn parse_filter(json: &str) -> anyhow::Result<Tree> {
    let filter = WireFilter::from_json(json).context("failed to parse filter JSON")?;
    let tree = wire::from_wire(&filter).context("malformed filter")?;
    tracing::debug!(
        target: TRACING_TARGET,
        flat = filter.is_flat(),
        conditions = tree.count_conditions(),
        depth = tree.max_depth(),
        "Loaded filter"
    );
    Ok(tree)
}

/// Validates a filter against a catalog.
pub fn validate(
    filter: &str,
    dimensions: &str,
    limits: FilterLimits,
) -> anyhow::Result<ValidationReport> {
    limits
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid filter limits")?;
    let catalog = DimensionCatalog::from_json(dimensions).context("invalid dimension catalog")?;
    let tree = parse_filter(filter)?;
    Ok(Validator::new(&catalog, limits).validate(&tree))
}

/// Renders a filter summary, optionally with custom operator labels.
pub fn summarize(filter: &str, labels: Option<&str>) -> anyhow::Result<String> {
    let labels = match labels {
        Some(json) => {
            serde_json::from_str::<OperatorLabels>(json).context("invalid operator labels")?
        }
        None => OperatorLabels::default(),
    };
    let tree = parse_filter(filter)?;
    Ok(Summarizer::new(labels).summarize(&tree))
}

/// Round-trips a filter and renders it in the requested shape.
pub fn convert(filter: &str, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    let tree = parse_filter(filter)?;
    let wire = match format {
        OutputFormat::Auto => wire::to_wire(&tree),
        OutputFormat::Nested => wire::to_wire_nested(&tree),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&wire)
    } else {
        serde_json::to_string(&wire)
    };
    json.context("failed to serialize filter")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMENSIONS: &str = r#"[
        {"key": "country", "label": "Country", "group": "Location",
         "allowedOperators": ["equals", "is_one_of"]},
        {"key": "browser", "label": "Browser", "group": "Technology",
         "allowedOperators": ["equals"]}
    ]"#;

    const NESTED: &str = r#"{"operator": "or", "children": [
        {"dimension": "country", "operator": "is", "value": ["US"]},
        {"dimension": "browser", "operator": "is", "value": ["Chrome"]}
    ]}"#;

    #[test]
    fn test_validate() {
        let report = validate(NESTED, DIMENSIONS, FilterLimits::default()).unwrap();
        assert!(report.is_valid());

        let filter = r#"[["is", "os", ["Linux"]]]"#;
        let report = validate(filter, DIMENSIONS, FilterLimits::default()).unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn test_validate_reports_bad_input() {
        assert!(validate("{", DIMENSIONS, FilterLimits::default()).is_err());
        assert!(validate(NESTED, "[]x", FilterLimits::default()).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let limits = FilterLimits::default().with_max_depth(0);
        let error = validate(NESTED, DIMENSIONS, limits).unwrap_err();
        assert!(format!("{error:#}").contains("invalid filter limits"));

        let limits = FilterLimits::default().with_max_conditions(0);
        assert!(validate(NESTED, DIMENSIONS, limits).is_err());
    }

    #[test]
    fn test_summarize() {
        assert_eq!(summarize(NESTED, None).unwrap(), "country = US OR browser = Chrome");
        let labels = r#"{"equals": "is"}"#;
        assert_eq!(
            summarize(NESTED, Some(labels)).unwrap(),
            "country is US OR browser is Chrome"
        );
    }

    #[test]
    fn test_convert() {
        let flat = r#"[["is","country",["US"]]]"#;
        assert_eq!(convert(flat, OutputFormat::Auto, false).unwrap(), flat);
        assert_eq!(
            convert(flat, OutputFormat::Nested, false).unwrap(),
            r#"{"operator":"and","children":[{"dimension":"country","operator":"is","value":["US"]}]}"#
        );

        let or = convert(NESTED, OutputFormat::Auto, false).unwrap();
        assert!(or.starts_with(r#"{"operator":"or""#));
    }

    #[test]
    fn test_convert_rejects_unknown_operator() {
        let error = convert(r#"[["eq", "country", ["US"]]]"#, OutputFormat::Auto, false).unwrap_err();
        assert!(format!("{error:#}").contains("unknown operator"));
    }
}
