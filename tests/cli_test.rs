use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_break-slides"))
        .current_dir(dir)
        .arg("--skip-render")
        .args(args)
        .envs(envs.iter().copied())
        .env_remove("BREAK_COLUMN_MAX")
        .env_remove("BREAK_WITH_SAFETY")
        .output()
        .expect("Failed to execute command")
}

fn create_tournament(dir: &Path) {
    fs::create_dir_all(dir).expect("Failed to create tournament folder");
    fs::write(
        dir.join("judges.csv"),
        "name\nOisin\nAoife\nCiara\nDeclan\nEimear\nFionn\nGrainne\n",
    )
    .expect("Failed to write judges");
    fs::write(
        dir.join("Open.csv"),
        "Rk,team,Pts,Spk,break\n1,Trinity A & B,15,1520,1\n2,UCD C,15,1500,2\n---------,,,,\n",
    )
    .expect("Failed to write open break");
    fs::write(
        dir.join("ESL.csv"),
        "Rk,team,Pts,Spk,break\n5,Galway A,12,1450,1\n6,UCC D,12,1440,(different break)\n",
    )
    .expect("Failed to write ESL break");
}

#[test]
fn test_folder_and_tournament_arguments() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let folder = temp_dir.path().join("cork");
    create_tournament(&folder);

    let output = run_command(
        temp_dir.path(),
        &[folder.to_str().unwrap(), "Cork Open 2026"],
        &[],
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let latex = fs::read_to_string(folder.join("break_slides.tex")).expect("Missing .tex output");
    let quarto = fs::read_to_string(folder.join("break_slides.qmd")).expect("Missing .qmd output");

    assert!(latex.contains("\\color{myblue} Cork Open 2026}"));
    assert!(quarto.contains("subtitle: \"Cork Open 2026\""));

    // Seven judges fit on a single two-column slide
    assert_eq!(latex.matches("\\column{0.5\\textwidth}").count(), 2);
    assert!(latex.contains("\\begin{frame}{Judge break} \\small"));
    assert!(latex.contains("\\item Aoife\\\\"));
    assert!(quarto.contains("- Aoife\n"));

    assert!(latex.contains("Trinity A \\& B"));
    assert!(quarto.contains("### __Trinity A & B__"));
    assert!(latex.contains("Breaking 1st ESL"));
    assert!(!latex.contains("UCC D"));
    assert!(!quarto.contains("UCC D"));
}

#[test]
fn test_bare_folder_name_is_tournament() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    create_tournament(&temp_dir.path().join("Galway IV"));

    let output = run_command(temp_dir.path(), &["Galway IV"], &[]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let quarto = fs::read_to_string(temp_dir.path().join("Galway IV").join("break_slides.qmd"))
        .expect("Missing .qmd output");
    assert!(quarto.contains("footer: \"Galway IV -- Break announcement\""));
}

#[test]
fn test_missing_folder_uses_test_data() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let fallback = temp_dir.path().join("fallback");
    create_tournament(&fallback);

    let output = run_command(
        temp_dir.path(),
        &["./does/not/exist"],
        &[("BREAK_FALLBACK_FOLDER", fallback.to_str().unwrap())],
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let latex = fs::read_to_string(fallback.join("break_slides.tex")).expect("Missing .tex output");
    assert!(latex.contains("Default IV"));
}

#[test]
fn test_column_max_and_safety_options() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let folder = temp_dir.path().join("dublin");
    create_tournament(&folder);

    let output = run_command(
        temp_dir.path(),
        &["--column-max", "2", "--safety", folder.to_str().unwrap()],
        &[],
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let quarto = fs::read_to_string(folder.join("break_slides.qmd")).expect("Missing .qmd output");
    // Seven judges in columns of at most two: four columns on two slides
    assert!(quarto.contains("## Judge break (1/2)\n"));
    assert!(quarto.contains("## Judge break (2/2)\n"));
    assert!(quarto.contains("## Safety slide judge break {.center}"));
    assert!(quarto.contains("## Safety slide {.center}"));
}

#[test]
fn test_zero_column_max_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let folder = temp_dir.path().join("limerick");
    create_tournament(&folder);

    let output = run_command(
        temp_dir.path(),
        &["--column-max", "0", folder.to_str().unwrap()],
        &[],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("column_max"));
    assert!(!folder.join("break_slides.tex").exists());
}
