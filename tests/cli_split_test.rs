use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_split_into_sections_with_adjusted_images() {
    let temp_dir = tempdir().unwrap();
    let base = temp_dir.path().join("Base");
    fs::create_dir(&base).unwrap();
    fs::write(
        base.join("01_course.md"),
        "# Title\n\nIntro\n\n## A\nbody A\n![x](./img.png)\n\n## B\nbody B\n[text](notes.md)\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("mdsimplify");
    cmd.current_dir(temp_dir.path()).args(["split", "Base", "Base/detailed"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("01_03.md").and(predicate::str::contains("1 image path(s)")));

    let detailed = base.join("detailed");
    assert_eq!(fs::read_to_string(detailed.join("01_01.md")).unwrap(), "# Title\n\nIntro\n\n");
    assert_eq!(
        fs::read_to_string(detailed.join("01_02.md")).unwrap(),
        "## A\nbody A\n![x](../img.png)\n\n"
    );
    assert_eq!(
        fs::read_to_string(detailed.join("01_03.md")).unwrap(),
        "## B\nbody B\n[text](notes.md)\n"
    );
    assert!(!detailed.join("01_04.md").exists());
}

#[test]
fn test_split_configured_pairs_skip_simplify_keys() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir_all(temp_dir.path().join("Src/Base")).unwrap();
    fs::create_dir_all(temp_dir.path().join("Course")).unwrap();
    fs::write(temp_dir.path().join("Src/Base/topic.md"), "## One\n```\n## not split\n```\n").unwrap();
    fs::write(temp_dir.path().join("Course/03_x.md"), "## Other\n").unwrap();
    fs::write(
        temp_dir.path().join("mdsimplify.toml"),
        r#"[directories]
base_source = "Src/Base"
base_target = "Out/Base"
course_simplify_source = "Course"
course_simplify_target = "Simplified"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("mdsimplify");
    cmd.current_dir(temp_dir.path()).arg("split");

    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Out/Base/to_01.md")).unwrap(),
        "## One\n```\n## not split\n```\n"
    );
    assert!(!temp_dir.path().join("Simplified").exists());
}

#[test]
fn test_split_duplicate_prefix_fails_file() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    fs::write(temp_dir.path().join("src").join("01_a.md"), "## A\n").unwrap();
    fs::write(temp_dir.path().join("src").join("01_b.md"), "## B\n").unwrap();

    let mut cmd = cargo_bin_cmd!("mdsimplify");
    cmd.current_dir(temp_dir.path()).args(["split", "src", "out"]);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("01_b.md").and(predicate::str::contains("already used")));
    assert_eq!(fs::read_to_string(temp_dir.path().join("out").join("01_01.md")).unwrap(), "## A\n");
}

#[test]
fn test_split_resolves_parent_segments_in_target() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("Base")).unwrap();
    fs::create_dir(temp_dir.path().join("Other")).unwrap();
    fs::write(temp_dir.path().join("Base").join("02_x.md"), "## X\n![i](img.png)\n").unwrap();

    let mut cmd = cargo_bin_cmd!("mdsimplify");
    cmd.current_dir(temp_dir.path()).args(["split", "Base", "Other/../Base/detailed"]);

    cmd.assert().success();
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Base/detailed/02_01.md")).unwrap(),
        "## X\n![i](../img.png)\n"
    );
}

#[test]
fn test_split_skips_blank_files() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    fs::write(temp_dir.path().join("src").join("05_blank.md"), "\n\n").unwrap();

    let mut cmd = cargo_bin_cmd!("mdsimplify");
    cmd.current_dir(temp_dir.path()).args(["split", "src", "out"]);

    cmd.assert().success().stdout(predicate::str::contains("no sections"));
    assert!(!temp_dir.path().join("out").join("05_01.md").exists());
}

#[test]
fn test_split_explicit_config_not_found() {
    let temp_dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("mdsimplify");
    cmd.current_dir(temp_dir.path())
        .args(["--config", "missing.toml", "split"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_split_invalid_heading_level_rejected() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join(".mdsimplify.toml"),
        "[settings]\nheading-level = 9\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("mdsimplify");
    cmd.current_dir(temp_dir.path()).arg("split");

    cmd.assert().code(2).stderr(predicate::str::contains("heading-level"));
}
