//! Integration tests for the typed merge layer.
//!
//! Validates that partial structs override only the fields they set, that
//! unset options defer to existing values, and that serde boundary
//! failures surface as the right error variants.

use anyhow::{Result, ensure};
use medley::MedleyError;
use rstest::{fixture, rstest};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
struct Profile {
    name: String,
    volume: u32,
    tags: Vec<String>,
    settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
struct Settings {
    theme: String,
    language: Option<String>,
}

#[derive(Debug, Default, Serialize)]
struct ProfilePatch {
    name: Option<String>,
    volume: Option<u32>,
    tags: Option<Vec<String>>,
    settings: Option<SettingsPatch>,
}

#[derive(Debug, Default, Serialize)]
struct SettingsPatch {
    theme: Option<String>,
}

#[fixture]
fn profile() -> Profile {
    Profile {
        name: String::from("Alice"),
        volume: 50,
        tags: vec![String::from("a")],
        settings: Settings {
            theme: String::from("light"),
            language: Some(String::from("en")),
        },
    }
}

#[rstest]
fn set_fields_override_existing_values(profile: Profile) -> Result<()> {
    let patched = medley::patch_typed(
        &profile,
        &ProfilePatch {
            volume: Some(100),
            ..ProfilePatch::default()
        },
    )?;
    ensure!(patched.volume == 100, "volume must be overridden");
    ensure!(patched.name == "Alice", "name must be untouched");
    ensure!(
        patched.settings == profile.settings,
        "settings must be untouched"
    );
    Ok(())
}

#[rstest]
fn unset_fields_defer_to_existing_values(profile: Profile) -> Result<()> {
    let patched = medley::patch_typed(&profile, &ProfilePatch::default())?;
    ensure!(patched == profile, "an all-None patch must change nothing");
    Ok(())
}

#[rstest]
fn sequence_fields_append_rather_than_replace(profile: Profile) -> Result<()> {
    let patched = medley::patch_typed(
        &profile,
        &ProfilePatch {
            tags: Some(vec![String::from("b")]),
            ..ProfilePatch::default()
        },
    )?;
    ensure!(
        patched.tags == [String::from("a"), String::from("b")],
        "sequence patches concatenate, got {:?}",
        patched.tags
    );
    Ok(())
}

#[rstest]
fn nested_patches_merge_recursively(profile: Profile) -> Result<()> {
    let patched = medley::patch_typed(
        &profile,
        &ProfilePatch {
            settings: Some(SettingsPatch {
                theme: Some(String::from("dark")),
            }),
            ..ProfilePatch::default()
        },
    )?;
    ensure!(patched.settings.theme == "dark", "theme must be overridden");
    ensure!(
        patched.settings.language.as_deref() == Some("en"),
        "language must survive the nested patch"
    );
    Ok(())
}

#[rstest]
#[case::number(&json!(42), "number")]
#[case::sequence(&json!([1, 2]), "array")]
#[case::text(&json!("plain"), "string")]
#[case::null(&json!(null), "null")]
fn non_object_values_are_rejected(
    #[case] value: &serde_json::Value,
    #[case] expected_kind: &str,
) -> Result<()> {
    let error = match medley::merge::to_mapping(value) {
        Ok(map) => anyhow::bail!("expected rejection, got mapping {map:?}"),
        Err(error) => error,
    };
    match error {
        MedleyError::NotAMapping { kind } => {
            ensure!(kind == expected_kind, "expected {expected_kind}, got {kind}");
        }
        other => anyhow::bail!("expected NotAMapping, got {other}"),
    }
    Ok(())
}

#[rstest]
fn ill_typed_merged_documents_surface_deserialize_errors(profile: Profile) -> Result<()> {
    let error = match medley::patch_typed(&profile, &json!({"volume": "loud"})) {
        Ok(patched) => anyhow::bail!("expected failure, got {patched:?}"),
        Err(error) => error,
    };
    ensure!(
        matches!(error, MedleyError::Deserialize { .. }),
        "expected Deserialize, got {error}"
    );
    Ok(())
}
