use std::path::Path;

use argmerge_merge::{self as engine, MergeConfig, PropertyPath};
use argmerge_types::{Record, Value};
use tracing::{debug_span, info};

use crate::error::{SdkError, SdkResult};

/// Merge operations bound to one [`MergeConfig`].
///
/// Operations that do not consult the configuration are exposed too, so
/// callers can go through a single handle.
#[derive(Clone, Debug, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Parse a configuration from TOML. Missing fields take their defaults.
    ///
    /// ```toml
    /// nested_sequences = "combine"
    /// respect_opaque = false
    /// ```
    pub fn from_toml_str(content: &str) -> SdkResult<Self> {
        let config: MergeConfig =
            toml::from_str(content).map_err(|e| SdkError::Config(e.to_string()))?;
        info!(
            nested_sequences = ?config.nested_sequences,
            respect_opaque = config.respect_opaque,
            "merge config loaded"
        );
        Ok(Self::new(config))
    }

    /// Load a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> SdkResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    // ---- Structural ----

    /// N-ary structural merge, left to right.
    pub fn merge_deep(&self, values: &[Value]) -> SdkResult<Value> {
        let _span = debug_span!("merge_deep", inputs = values.len()).entered();
        Ok(engine::merge_deep(values)?)
    }

    /// [`Merger::merge_deep`] over JSON documents.
    ///
    /// Fails if an input is not an object or array.
    pub fn merge_deep_json(&self, documents: &[serde_json::Value]) -> SdkResult<serde_json::Value> {
        let values: Vec<Value> = documents.iter().cloned().map(Value::from).collect();
        Ok(self.merge_deep(&values)?.to_json()?)
    }

    // ---- Argument lists ----

    pub fn merge_element(&self, default: &Value, overriding: &Value) -> Value {
        engine::merge_element_with(default, overriding, &self.config)
    }

    pub fn merge_argument_list(&self, overriding: &[Value], defaults: &[Value]) -> Vec<Value> {
        let _span = debug_span!("merge_argument_list", arguments = overriding.len()).entered();
        engine::merge_argument_list_with(overriding, defaults, &self.config)
    }

    /// Resolve `target` against default lists, earliest list first.
    pub fn deep_merge_parameter<L: AsRef<[Value]>>(&self, target: &[Value], default_lists: &[L]) -> Vec<Value> {
        let _span = debug_span!("deep_merge_parameter", layers = default_lists.len()).entered();
        engine::deep_merge_parameter_with(target, default_lists, &self.config)
    }

    pub fn combine_sequences(&self, default: &[Value], overriding: &[Value]) -> Vec<Value> {
        engine::combine_sequences_with(default, overriding, &self.config)
    }

    /// Seed `passed_arg` in place from `default_arg`.
    pub fn merge_default_parameter<'a>(
        &self,
        default_arg: &[Value],
        passed_arg: &'a mut Vec<Value>,
    ) -> &'a mut Vec<Value> {
        let _span = debug_span!("merge_default_parameter").entered();
        engine::merge_default_parameter(default_arg, passed_arg)
    }

    pub fn remove_undefined_from_object(&self, record: &Record) -> Record {
        engine::remove_undefined_from_object(record)
    }

    // ---- Record shaping ----

    pub fn merge_own_nested_property<'a>(
        &self,
        target: &'a mut Record,
        property_path: impl Into<PropertyPath>,
        value: &Record,
    ) -> SdkResult<&'a mut Record> {
        Ok(engine::merge_own_nested_property(target, property_path, value)?)
    }

    pub fn merge_nonexistent_properties(&self, target: &mut Record, default: &Record) -> usize {
        engine::merge_nonexistent_properties(target, default)
    }

    pub fn shallow_merge_nonexisting_property_only<'a>(
        &self,
        target: &'a mut Record,
        base: &Record,
    ) -> &'a mut Record {
        engine::shallow_merge_nonexisting_property_only(target, base)
    }
}
