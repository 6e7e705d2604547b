//! Binding call arguments to declared parameters.
//!
//! Positional arguments fill parameters in order, then named arguments fill
//! the rest by name. Unfilled parameters take their defaults, evaluated in
//! the new frame so they can refer to earlier parameters. A trailing rest
//! parameter collects surplus positional arguments, and surplus keywords
//! land in the same arglist.

use vellum_diagnostic::{
    duplicate_argument, missing_argument, no_such_argument, too_many_arguments, EvalResult,
};
use vellum_ir::{Parameter, Value};

use crate::interpreter::Interpreter;

/// Arguments after splats have been expanded.
#[derive(Debug, Default)]
struct Spread {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Spread {
    fn new(args: Vec<Value>, precision: usize) -> Self {
        let mut spread = Spread::default();
        for arg in args {
            let Value::Argument(arg) = arg else {
                spread.positional.push(arg);
                continue;
            };
            match &arg.value {
                Value::Map(map) if arg.is_keyword_rest => {
                    for (key, value) in &map.entries {
                        let name = key.to_text(precision);
                        let name = name.strip_prefix('$').unwrap_or(&name).to_string();
                        spread.named.push((name, value.clone()));
                    }
                }
                Value::List(list) if arg.is_rest => {
                    spread.positional.extend(list.items.iter().cloned());
                    spread.named.extend(list.keywords.iter().cloned());
                }
                value if arg.is_rest || arg.is_keyword_rest => {
                    spread.positional.extend(value.list_items());
                }
                value => match &arg.name {
                    Some(name) => spread.named.push((name.clone(), value.clone())),
                    None => spread.positional.push(value.clone()),
                },
            }
        }
        spread
    }
}

impl Interpreter {
    /// Bind `args` to `params` in the current frame.
    ///
    /// `label` names the callee in error messages (``function `f` ``).
    pub(crate) fn bind_arguments(
        &mut self,
        label: &str,
        params: &[Parameter],
        args: Vec<Value>,
    ) -> EvalResult<()> {
        let Spread { positional, named } = Spread::new(args, self.precision());
        let (fixed, rest) = match params.split_last() {
            Some((last, init)) if last.is_rest => (init, Some(last)),
            _ => (params, None),
        };
        if positional.len() > fixed.len() && rest.is_none() {
            return Err(too_many_arguments(fixed.len(), positional.len()));
        }

        let mut slots: Vec<Option<Value>> = vec![None; fixed.len()];
        let mut positional = positional.into_iter();
        for slot in &mut slots {
            match positional.next() {
                Some(value) => *slot = Some(value),
                None => break,
            }
        }
        let surplus: Vec<Value> = positional.collect();

        let mut keywords = Vec::new();
        for (name, value) in named {
            match fixed.iter().position(|p| p.name == name) {
                Some(i) if slots[i].is_some() => return Err(duplicate_argument(label, &name)),
                Some(i) => slots[i] = Some(value),
                None if rest.is_some() => keywords.push((name, value)),
                None => return Err(no_such_argument(&name)),
            }
        }

        for (param, slot) in fixed.iter().zip(slots) {
            let value = match (slot, &param.default) {
                (Some(value), _) => value,
                (None, Some(default)) => self.eval_expr(default)?.unwrap_argument(),
                (None, None) => return Err(missing_argument(label, &param.name)),
            };
            self.env.define(&param.name, value);
        }
        if let Some(rest) = rest {
            self.env
                .define(&rest.name, Value::arglist(surplus, keywords));
        }
        Ok(())
    }
}
