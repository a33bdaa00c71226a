use crate::crawler::CrawlResult;
use crate::Result;
use std::path::Path;

/// Serializes the result list to a pretty-printed JSON string
pub fn results_to_json(results: &[CrawlResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Writes the result list as a JSON array to the given path
///
/// # Arguments
///
/// * `results` - The collected crawl results
/// * `path` - Destination file; overwritten if it exists
pub fn write_results(results: &[CrawlResult], path: &Path) -> Result<()> {
    let json = results_to_json(results)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<CrawlResult> {
        vec![CrawlResult {
            url: "https://example.com/".to_string(),
            title: "Example".to_string(),
            outlinks: vec!["https://example.com/about".to_string()],
        }]
    }

    #[test]
    fn test_results_to_json_shape() {
        let json = results_to_json(&sample_results()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["url"], "https://example.com/");
        assert_eq!(value[0]["title"], "Example");
        assert_eq!(value[0]["outlinks"][0], "https://example.com/about");
    }

    #[test]
    fn test_write_results_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        write_results(&sample_results(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);

        // The file holds exactly the string serialization.
        assert_eq!(content, results_to_json(&sample_results()).unwrap());
    }

    #[test]
    fn test_empty_results_is_empty_array() {
        let json = results_to_json(&[]).unwrap();
        assert_eq!(json.trim(), "[]");
    }
}
