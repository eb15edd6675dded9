use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("duskmode").chain(args.iter().copied())).expect("parse")
}

fn run_to_string(args: &[&str]) -> String {
    let mut out = Vec::new();
    run(parse(args).command, &mut out).expect("run");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn install_defaults_to_public() {
    let Command::Install(args) = parse(&["install"]).command else {
        panic!("expected install");
    };
    let options: InstallOptions = args.into();
    assert_eq!(options.static_dir, PathBuf::from("public"));
    assert!(options.source.is_none());
}

#[test]
fn install_writes_into_static_dir() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("static");
    let dir_arg = dir.to_string_lossy().to_string();

    let output = run_to_string(&["install", "--static-dir", &dir_arg]);
    let installed = dir.join(script::SCRIPT_FILE_NAME);
    assert_eq!(output.trim(), installed.display().to_string());
    assert_eq!(
        std::fs::read_to_string(installed).expect("read back"),
        script::render()
    );
}

#[test]
fn install_missing_source_is_an_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir_arg = tmp.path().join("static").to_string_lossy().to_string();
    let source_arg = tmp.path().join("missing.js").to_string_lossy().to_string();
    let cli = parse(&["install", "--static-dir", &dir_arg, "--source", &source_arg]);

    let err = run(cli.command, &mut Vec::new()).expect_err("missing source");
    assert!(matches!(err, CliError::Install(InstallError::Read { .. })));
}

#[test]
fn script_prints_rendered_body() {
    assert_eq!(run_to_string(&["script"]), script::render());
}

#[test]
fn script_tag_wraps_body() {
    let output = run_to_string(&["script", "--tag"]);
    assert!(output.starts_with("<script>\n"));
    assert!(output.trim_end().ends_with("</script>"));
    assert!(output.contains(&script::render()));
}

#[test]
fn resolve_follows_precedence() {
    assert_eq!(run_to_string(&["resolve", "--prefers-dark", "true"]), "dark\n");
    assert_eq!(
        run_to_string(&["resolve", "--stored", "light", "--prefers-dark", "true"]),
        "light\n"
    );
    assert_eq!(
        run_to_string(&["resolve", "--stored", "blue", "--prefers-dark", "false"]),
        "light\n"
    );
    assert_eq!(run_to_string(&["resolve"]), "light\n");
}

#[test]
fn resolve_rejects_non_boolean_signal() {
    let args = ["duskmode", "resolve", "--prefers-dark", "maybe"];
    assert!(Cli::try_parse_from(args).is_err());
}
