//! Records declared at compile time with `#[prettytuple]`.

use insta::assert_snapshot;
use prettytuple::{RecordInfo, prettytuple};

/// Geographical coordinates of a point, i.e. its latitude and longitude.
#[prettytuple]
pub fn Location(lat: f64, #[default(0.0)] long: f64) {}

/// Where a service listens.
///
/// Only the host is required.
#[prettytuple(module = "net::config")]
#[derive(Default)]
fn Endpoint(host: String, #[default(8080)] port: u16, #[default = false] tls: bool) {}

#[prettytuple]
fn Nothing() {}

#[prettytuple]
#[inline]
fn Label(text: &'static str, #[default(None)] color: Option<u8>) {}

#[test]
fn location_reflects_its_declaration() {
    assert_eq!(Location::TYPE_NAME, "Location");
    assert_eq!(Location::field_names(), ["lat", "long"]);
    assert_eq!(Location::field_types(), ["f64", "f64"]);
    assert_eq!(Location::field_defaults(), [("long", "0.0")]);
    assert_eq!(
        Location::DOC,
        Some("Geographical coordinates of a point, i.e. its latitude and longitude.")
    );
    assert_eq!(Location::MODULE, module_path!());
    assert_eq!(Location::qualified_name(), format!("{}::Location", module_path!()));
}

#[test]
fn location_constructors_and_display() {
    let here = Location::with_defaults(51.5);
    assert_eq!(here, Location::new(51.5, 0.0));
    assert_eq!(here.lat, 51.5);
    assert_snapshot!(here.to_string(), @"Location(lat=51.5, long=0.0)");

    let there = Location { long: -0.12, ..here.clone() };
    assert_snapshot!(there.to_string(), @"Location(lat=51.5, long=-0.12)");
}

#[test]
fn location_converts_to_and_from_tuples() {
    let here = Location::new(48.85, 2.35);
    let (lat, long) = here.clone().into_tuple();
    assert_eq!((lat, long), (48.85, 2.35));

    let back: Location = (lat, long).into();
    assert_eq!(back, here);

    let tuple: (f64, f64) = here.into();
    assert_eq!(tuple, (48.85, 2.35));
}

#[test]
fn module_argument_overrides_reported_module() {
    assert_eq!(Endpoint::MODULE, "net::config");
    assert_eq!(Endpoint::qualified_name(), "net::config::Endpoint");
    assert_eq!(Endpoint::DOC, Some("Where a service listens.\n\nOnly the host is required."));
    assert_eq!(Endpoint::field_defaults(), [("port", "8080"), ("tls", "false")]);
}

#[test]
fn endpoint_keeps_extra_attributes_and_defaults() {
    let ep = Endpoint::with_defaults("localhost".to_string());
    assert_eq!(ep.port, 8080);
    assert!(!ep.tls);
    assert_snapshot!(ep.to_string(), @r#"Endpoint(host="localhost", port=8080, tls=false)"#);

    // `#[derive(Default)]` written on the function lands on the struct.
    let blank = Endpoint::default();
    assert_eq!(blank.port, 0);
}

#[test]
fn zero_field_record() {
    let nothing = Nothing::new();
    assert_eq!(Nothing::field_names(), [] as [&str; 0]);
    assert_eq!(Nothing::DOC, None);
    assert_snapshot!(nothing.to_string(), @"Nothing()");
    let () = nothing.into_tuple();
}

#[test]
fn function_attributes_and_static_borrows_are_accepted() {
    let label = Label::with_defaults("ok");
    assert_eq!(label.color, None);
    assert_eq!(Label::field_names(), ["text", "color"]);
    assert_snapshot!(label.to_string(), @r#"Label(text="ok", color=None)"#);
}
