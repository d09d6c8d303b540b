use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_parse_command() {
    // Create temporary directory
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    // Create sample markdown file
    let markdown_path = temp_path.join("deck.md");
    let markdown_content = "# Test Slide\n\n- one\n- two\n---\n## Next";
    fs::write(&markdown_path, markdown_content).expect("Failed to write markdown file");

    // Output JSON path
    let output_path = temp_path.join("slides.json");

    // Run command
    let output = run_command(&[
        "parse",
        "-i",
        markdown_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    // Check command executed successfully
    assert!(output.status.success(), "Command failed: {:?}", output);

    // Check output file exists
    assert!(output_path.exists(), "Output file was not created");

    // Verify output content
    let json_content = fs::read_to_string(&output_path).expect("Failed to read output file");
    let slides: serde_json::Value =
        serde_json::from_str(&json_content).expect("Output is not valid JSON");

    let slides = slides.as_array().expect("Output should be a JSON array");
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0]["id"], "s0");
    assert_eq!(slides[0]["elements"][0]["type"], "title");
    assert_eq!(slides[0]["elements"][1]["type"], "bullets");
    assert_eq!(slides[1]["elements"][0]["type"], "subtitle");
}

#[test]
fn test_parse_command_with_min_heading_level() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let markdown_path = temp_path.join("deck.md");
    fs::write(&markdown_path, "# big\n## small\nbody").expect("Failed to write markdown file");

    let output_path = temp_path.join("slides.json");

    let output = run_command(&[
        "parse",
        "-i",
        markdown_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "--min-heading-level",
        "2",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json_content = fs::read_to_string(&output_path).expect("Failed to read output file");
    let slides: serde_json::Value =
        serde_json::from_str(&json_content).expect("Output is not valid JSON");
    assert_eq!(slides.as_array().unwrap().len(), 2);
}

#[test]
fn test_parse_command_rejects_invalid_heading_level() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let markdown_path = temp_path.join("deck.md");
    fs::write(&markdown_path, "# T").expect("Failed to write markdown file");

    let output = run_command(&[
        "parse",
        "-i",
        markdown_path.to_str().unwrap(),
        "--min-heading-level",
        "0",
    ]);

    assert!(!output.status.success(), "Command should have failed");
}

#[test]
fn test_toc_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let markdown_path = temp_path.join("deck.md");
    fs::write(&markdown_path, "# Title\nbody\n## Section")
        .expect("Failed to write markdown file");

    let output_path = temp_path.join("toc.json");

    let output = run_command(&[
        "toc",
        "-i",
        markdown_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json_content = fs::read_to_string(&output_path).expect("Failed to read output file");
    let toc: serde_json::Value =
        serde_json::from_str(&json_content).expect("Output is not valid JSON");

    let toc = toc.as_array().expect("Output should be a JSON array");
    assert_eq!(toc.len(), 2);
    assert_eq!(toc[0]["text"], "Title");
    assert_eq!(toc[0]["level"], 1);
    assert_eq!(toc[1]["lineIndex"], 2);
}

#[test]
fn test_missing_input_file_fails() {
    let output = run_command(&["parse", "-i", "/nonexistent/deck.md"]);
    assert!(!output.status.success(), "Command should have failed");
}
