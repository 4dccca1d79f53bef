use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const PACKAGE_DIR: &str = "node_modules/@acme/ui-core/dist/icons";

fn compiled_icon(name: &str, d: &str) -> String {
    format!(
        r#"import {{ jsx }} from "react/jsx-runtime";
const {name} = (props) => jsx("svg", {{ width: "24", height: "24", viewBox: "0 0 24 24", fill: "none", ...props, children: jsx("path", {{ d: "{d}", fill: "var(--icon-color)" }}) }});
export {{ {name} }};
"#
    )
}

/// Two apps sharing the icon package, one with custom icons, one missing.
fn workspace() -> Result<CliTest> {
    let test = CliTest::with_file(
        ".icongalleryrc.json",
        r##"{
  "workspaceRoot": "repos",
  "output": "site/index.html",
  "title": "Acme Icons",
  "apps": [
    { "name": "web", "color": "#4A90D9", "customIconDirs": ["src/svgs"] },
    { "name": "admin", "color": "#4AD97A" },
    { "name": "mobile" }
  ]
}"##,
    )?;

    test.write_file(
        &format!("repos/web/{}/icon-add/index.js", PACKAGE_DIR),
        &compiled_icon("IconAdd", "M12 5v14M5 12h14"),
    )?;
    test.write_file(
        &format!("repos/web/{}/icon-add/index.js.map", PACKAGE_DIR),
        "{}",
    )?;
    test.write_file(
        &format!("repos/admin/{}/icon-plus/index.js", PACKAGE_DIR),
        &compiled_icon("IconPlus", "M12 5v14M5 12h14"),
    )?;
    test.write_file(
        &format!("repos/admin/{}/icon-home/index.js", PACKAGE_DIR),
        &compiled_icon("IconHome", "M3 12L12 3l9 9M5 10v10h14V10"),
    )?;
    test.write_file(
        "repos/web/src/svgs/HomeOutline.tsx",
        r#"export const HomeOutline = (props) => (
  <svg width="24" height="24" {...props} className={props.className}>
    <path d="M3 12L12 3l9 9M5 10v10h14V11" fill="var(--c)" />
  </svg>
);"#,
    )?;
    test.write_file(
        "repos/web/src/App.tsx",
        r#"import { IconAdd } from "@acme/ui-core";
import { HomeOutline } from "./svgs/HomeOutline";
export const App = () => <i className="pi pi-check" />;"#,
    )?;
    test.write_file("repos/web/src/menu.ts", "const items = [{ icon: 'pi pi-cog' }];")?;
    test.write_file("repos/admin/src/Dashboard.tsx", "<IconHome /><IconPlus />")?;

    Ok(test)
}

#[test]
fn test_generate_writes_report() -> Result<()> {
    let test = workspace()?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let html = test.read_file("site/index.html")?;

    assert!(html.contains("<title>Acme Icons</title>"));
    assert!(html.contains("6 total icons (4 SVG components + 2 legacy classes)"));
    assert!(html.contains(r##"<path d="M12 5v14M5 12h14" fill="#333"/>"##));
    assert!(html.contains(r#"data-name="homeoutline" data-apps="web" data-source="custom-component:web""#));
    assert!(html.contains(r#"data-name="iconhome" data-apps="admin" data-source="shared-package""#));
    assert!(html.contains(r#"<i class="pi pi-cog"></i>"#));
    assert!(html.contains(r#"<span class="dup-type exact">EXACT</span>"#));
    assert!(html.contains(r#"<span class="dup-type near">~96%</span>"#));

    Ok(())
}

#[test]
fn test_generate_summary() -> Result<()> {
    let test = workspace()?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("web: 2 icons, 2 legacy classes"));
    assert!(out.contains("admin: 2 icons, 0 legacy classes"));
    assert!(out.contains("mobile: skipped (directory not found)"));
    assert!(out.contains("IconAdd, IconPlus"));
    assert!(out.contains("HomeOutline <-> IconHome  (96%)"));
    assert!(out.contains("Summary: 4 SVG icons + 2 legacy classes = 6 total"));

    Ok(())
}

#[test]
fn test_generate_is_deterministic() -> Result<()> {
    let test = workspace()?;

    test.generate_command().output()?;
    let first = test.read_file("site/index.html")?;
    test.generate_command().output()?;
    let second = test.read_file("site/index.html")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_generate_with_overrides() -> Result<()> {
    let test = workspace()?;

    let output = test
        .generate_command()
        .args(["--root", "nowhere", "--output", "other.html"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let html = test.read_file("other.html")?;
    assert!(html.contains("0 total icons"));
    assert!(html.contains("No redundant icons detected."));
    assert!(!test.root().join("site/index.html").exists());

    Ok(())
}

#[test]
fn test_generate_verbose_warns_on_missing_sources() -> Result<()> {
    let test = workspace()?;

    let output = test.generate_command().arg("--verbose").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: mobile: no ui-core copy"));

    Ok(())
}

#[test]
fn test_generate_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(
        ".icongalleryrc.json",
        r#"{ "apps": [{ "name": "web" }, { "name": "web" }] }"#,
    )?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Duplicate app"));

    Ok(())
}

#[test]
fn test_generate_unwritable_output_fails() -> Result<()> {
    let test = workspace()?;
    test.write_file("blocked", "not a directory")?;

    let output = test
        .generate_command()
        .args(["--output", "blocked/index.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));

    Ok(())
}
