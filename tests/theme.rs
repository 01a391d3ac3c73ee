use hyprtint::color::ColorSpec;
use hyprtint::effect::FG;
use hyprtint::error::Error;
use hyprtint::theme::Theme;
use hyprtint::wheel::WheelFactory;
use std::fs;
use tempfile::TempDir;

#[test]
fn default_theme_is_empty_with_rgb_space() {
    let theme = Theme::default();
    assert!(theme.colors.is_empty());
    assert_eq!(theme.gradient.space, "rgb");
}

#[test]
fn empty_file_produces_the_default_theme() {
    let theme = Theme::from_toml("").unwrap();
    assert!(theme.colors.is_empty());
    assert_eq!(theme.gradient.space, "rgb");
}

#[test]
fn from_path_loads_colors_and_gradient_section() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("hyprtint.toml");
    fs::write(
        &path,
        r##"
[colors]
rose = "#FF0066"
sky = "#87CEEB"

[gradient]
space = "hls"
"##,
    )
    .unwrap();

    let theme = Theme::from_path(&path).unwrap();
    assert_eq!(theme.colors.len(), 2);
    assert_eq!(theme.colors["rose"], "#FF0066");
    assert_eq!(theme.gradient.space, "hls");
}

#[test]
fn malformed_toml_is_an_error() {
    let err = Theme::from_toml("[colors\nrose = ").unwrap_err();
    assert!(matches!(err, Error::ThemeParse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp_dir = TempDir::new().unwrap();
    let err = Theme::from_path(&tmp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn theme_colors_feed_named_resolution() {
    let theme = Theme::from_toml(
        r##"
[colors]
rose = "#F06"
"##,
    )
    .unwrap();

    let effect = FG
        .color(&ColorSpec::Named("rose".to_string()), &theme.colors)
        .unwrap();
    assert_eq!(effect.sequence(), "\x1b[38;2;255;0;102m");
}

#[test]
fn theme_space_feeds_the_wheel_factory() {
    let theme = Theme::from_toml("[gradient]\nspace = \"hls\"").unwrap();
    assert!(WheelFactory::named(&theme.gradient.space).is_ok());

    let theme = Theme::from_toml("[gradient]\nspace = \"oklch\"").unwrap();
    assert!(matches!(
        WheelFactory::named(&theme.gradient.space),
        Err(Error::InvalidSpace(_))
    ));
}
