use anyhow::Result;
use crux_core::typegen::TypeGen;
use foco_core::{
    events::{AssistantEvent, ConnectionEvent, SettingsEvent},
    types::{ChatRole, ConnectionState, SettingsField},
    App, DelayResponse, DeviceResponse,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<ConnectionEvent>()?;
    gen.register_type::<SettingsEvent>()?;
    gen.register_type::<AssistantEvent>()?;

    // Enums carried in the view model and shell outputs
    gen.register_type::<ConnectionState>()?;
    gen.register_type::<SettingsField>()?;
    gen.register_type::<ChatRole>()?;
    gen.register_type::<DeviceResponse>()?;
    gen.register_type::<DelayResponse>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
