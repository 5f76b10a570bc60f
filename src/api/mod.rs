mod engine;
mod engine_config;
mod engine_snapshot;
mod events;
mod json_contract;
mod key_map;

pub use engine::CalcEngine;
pub use engine_config::CalcEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use events::InputEvent;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use key_map::event_for_key;
