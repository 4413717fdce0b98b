use toml::{Value, map::Map};

/// Merges imported tables in order, then lays `main` over the result.
pub fn merge_with_imports(imports: Vec<Value>, main: Value) -> Value {
    let merged_imports = imports
        .into_iter()
        .fold(Value::Table(Map::new()), deep_merge);

    deep_merge(merged_imports, main)
}

/// Deep merges `overlay` onto `base`.
///
/// Tables merge key by key; any other value in `overlay` replaces the one
/// in `base`.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(mut merged)) => {
            for (key, base_value) in base_table {
                let value = match merged.remove(&key) {
                    Some(overlay_value) => deep_merge(base_value, overlay_value),
                    None => base_value,
                };
                merged.insert(key, value);
            }

            Value::Table(merged)
        }
        (_, overlay) => overlay,
    }
}
