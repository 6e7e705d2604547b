//! List and map functions.
//!
//! Every value can be viewed as a list (`Value::list_items`), so `length(1px)`
//! is 1 and a map is a list of key/value pairs. An empty list is accepted
//! wherever a map is expected.

use vellum_diagnostic::{index_out_of_bounds, EvalError, EvalResult};
use vellum_ir::{MapValue, Separator, Value};

use crate::interpreter::NativeCall;

pub(super) fn length(call: &mut NativeCall<'_>) -> EvalResult {
    Ok(Value::number(call.arg("list").list_items().len() as f64))
}

/// 1-based; negative indices count from the end.
pub(super) fn nth(call: &mut NativeCall<'_>) -> EvalResult {
    let items = call.arg("list").list_items();
    let n = call.number("n")?;
    let len = items.len();
    let index = if n.value.fract() == 0.0 && n.value != 0.0 {
        let position = n.value.abs() as usize;
        if position > len {
            None
        } else if n.value > 0.0 {
            Some(position - 1)
        } else {
            Some(len - position)
        }
    } else {
        None
    };
    match index {
        Some(i) => Ok(items[i].clone()),
        None => Err(index_out_of_bounds(
            &Value::from_number(n).inspect(call.precision()),
            len,
        )),
    }
}

/// `join($list1, $list2, $separator: auto)`.
///
/// With `auto`, the first list's separator wins if it has more than one
/// item, then the second list's; otherwise space.
pub(super) fn join(call: &mut NativeCall<'_>) -> EvalResult {
    let first = call.arg("list1");
    let second = call.arg("list2");
    let separator = match call.arg("separator").as_str() {
        Some("auto") => auto_separator(&first, &second),
        Some("comma") => Separator::Comma,
        Some("space") => Separator::Space,
        _ => {
            return Err(EvalError::new(
                "Separator name must be space, comma, or auto",
            ))
        }
    };
    let mut items = first.list_items();
    items.extend(second.list_items());
    Ok(Value::list(items, separator))
}

fn auto_separator(first: &Value, second: &Value) -> Separator {
    let multi = |value: &Value| match value {
        Value::List(list) => list.len() > 1,
        Value::Map(map) => !map.is_empty(),
        _ => false,
    };
    if multi(first) {
        first.separator()
    } else if multi(second) {
        second.separator()
    } else {
        Separator::Space
    }
}

/// The `$map` argument, with `()` standing in for the empty map.
fn map_arg(call: &NativeCall<'_>) -> EvalResult<MapValue> {
    match call.arg("map") {
        Value::Map(map) => Ok((*map).clone()),
        Value::List(list) if list.is_empty() => Ok(MapValue::new(Vec::new())),
        other => Err(call.type_error("map", &other, "map")),
    }
}

/// Null when the key is absent.
pub(super) fn map_get(call: &mut NativeCall<'_>) -> EvalResult {
    let map = map_arg(call)?;
    Ok(map.get(&call.arg("key")).cloned().unwrap_or(Value::Null))
}

pub(super) fn map_keys(call: &mut NativeCall<'_>) -> EvalResult {
    let map = map_arg(call)?;
    Ok(Value::list(map.keys().cloned().collect(), Separator::Comma))
}

pub(super) fn map_has_key(call: &mut NativeCall<'_>) -> EvalResult {
    let map = map_arg(call)?;
    Ok(Value::Boolean(map.contains_key(&call.arg("key"))))
}

/// Keyword arguments collected by a rest parameter, as a map keyed by
/// unquoted names without `$`.
pub(super) fn keywords(call: &mut NativeCall<'_>) -> EvalResult {
    match call.arg("args") {
        Value::List(list) if list.is_arglist => Ok(Value::map(
            list.keywords
                .iter()
                .map(|(name, value)| (Value::string(name.clone()), value.clone()))
                .collect(),
        )),
        other => Err(call.type_error("args", &other, "variable argument list")),
    }
}
