use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn px(value: f64) -> Value {
    Value::dimension(value, "px")
}

#[test]
fn test_truthiness() {
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Boolean(false).is_truthy());
    assert!(Value::Boolean(true).is_truthy());
    assert!(Value::number(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::empty_list().is_truthy());
}

#[test]
fn test_type_names() {
    assert_eq!(px(1.0).type_name(), "number");
    assert_eq!(Value::rgba(0.0, 0.0, 0.0, 1.0).type_name(), "color");
    assert_eq!(Value::quoted("a").type_name(), "string");
    assert_eq!(Value::Boolean(true).type_name(), "bool");
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::empty_list().type_name(), "list");
    assert_eq!(Value::arglist(vec![], vec![]).type_name(), "arglist");
    assert_eq!(Value::map(vec![]).type_name(), "map");
}

#[test]
fn test_null_equality() {
    assert!(Value::Null.equals(&Value::Null));
    assert!(!Value::Null.equals(&Value::Boolean(false)));
    assert!(!Value::Null.equals(&Value::string("")));
}

#[test]
fn test_cross_type_unequal() {
    assert!(!Value::number(1.0).equals(&Value::string("1")));
    let red = Value::color(color_by_name("red").unwrap());
    assert!(!red.equals(&Value::string("red")));
}

#[test]
fn test_number_equality_normalizes_units() {
    assert!(Value::dimension(1.0, "in").equals(&px(96.0)));
    assert!(px(96.0).equals(&Value::dimension(1.0, "in")));
    assert!(!px(1.0).equals(&Value::number(1.0)));
    assert!(!Value::number(1.0).equals(&px(1.0)));
    assert!(!px(1.0).equals(&Value::dimension(1.0, "s")));
}

#[test]
fn test_string_equality_ignores_quotes() {
    assert!(Value::quoted("a").equals(&Value::string("a")));
    assert!(!Value::quoted("a").equals(&Value::quoted("b")));
}

#[test]
fn test_color_equality_ignores_spelling() {
    let named = Value::color(color_by_name("red").unwrap());
    let hex = Value::color(Color::from_hex("#f00").unwrap());
    assert!(named.equals(&hex));
}

#[test]
fn test_list_equality() {
    let a = Value::list(vec![px(1.0), px(2.0)], Separator::Space);
    let b = Value::list(vec![px(1.0), px(2.0)], Separator::Space);
    let c = Value::list(vec![px(1.0), px(2.0)], Separator::Comma);
    assert!(a.equals(&b));
    assert!(!a.equals(&c));

    let single_space = Value::list(vec![px(1.0)], Separator::Space);
    let single_comma = Value::list(vec![px(1.0)], Separator::Comma);
    assert!(!single_space.equals(&single_comma));
    assert!(!Value::empty_list().equals(&Value::list(Vec::new(), Separator::Comma)));
}

#[test]
fn test_map_lookup_uses_value_equality() {
    let map = MapValue::new(vec![
        (Value::string("a"), Value::number(1.0)),
        (Value::dimension(1.0, "in"), Value::number(2.0)),
    ]);
    assert_eq!(map.get(&Value::quoted("a")), Some(&Value::number(1.0)));
    assert_eq!(map.get(&px(96.0)), Some(&Value::number(2.0)));
    assert!(!map.contains_key(&Value::string("b")));
}

#[test]
fn test_unwrap_argument() {
    let arg = Value::argument(ArgumentValue {
        value: px(3.0),
        name: Some("x".into()),
        is_rest: false,
        is_keyword_rest: false,
    });
    assert_eq!(arg.unwrap_argument(), px(3.0));
}

#[test]
fn test_list_items_of_map() {
    let map = Value::map(vec![(Value::string("a"), Value::number(1.0))]);
    let items = map.list_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].inspect(DEFAULT_PRECISION), "a 1");
    assert_eq!(Value::number(5.0).list_items(), vec![Value::number(5.0)]);
}

#[test]
fn test_render_numbers() {
    assert_eq!(px(12.0).to_css(5), "12px");
    assert_eq!(Value::dimension(50.0, "%").to_css(5), "50%");
    assert_eq!(Value::number(1.0 / 3.0).to_css(3), "0.333");
}

#[test]
fn test_render_null() {
    assert_eq!(Value::Null.to_css(5), "");
    assert_eq!(Value::Null.inspect(5), "null");
}

#[test]
fn test_render_strings() {
    assert_eq!(Value::quoted("a b").to_css(5), "\"a b\"");
    assert_eq!(Value::quoted("a b").to_text(5), "a b");
    assert_eq!(Value::string_with("it's", QuoteMark::Single).to_css(5), "'it\\'s'");
    assert_eq!(Value::string("bold").to_css(5), "bold");
}

#[test]
fn test_render_colors() {
    let named = Value::color(color_by_name("Red").unwrap());
    assert_eq!(named.to_css(5), "Red");
    assert_eq!(Value::rgba(255.0, 0.0, 0.0, 1.0).to_css(5), "#ff0000");
    assert_eq!(
        Value::rgba(16.0, 32.0, 48.0, 0.5).to_css(5),
        "rgba(16, 32, 48, 0.5)"
    );
}

#[test]
fn test_render_lists() {
    let inner = Value::list(vec![px(1.0), px(2.0)], Separator::Comma);
    let outer = Value::list(vec![inner, px(3.0)], Separator::Space);
    assert_eq!(outer.to_css(5), "1px, 2px 3px");
    assert_eq!(outer.inspect(5), "(1px, 2px) 3px");
    assert_eq!(Value::empty_list().inspect(5), "()");
    assert_eq!(Value::empty_list().to_css(5), "");
}

#[test]
fn test_render_list_skips_nulls_in_css() {
    let list = Value::list(vec![px(1.0), Value::Null, px(2.0)], Separator::Space);
    assert_eq!(list.to_css(5), "1px 2px");
    assert_eq!(list.inspect(5), "1px null 2px");
}

#[test]
fn test_render_map() {
    let map = Value::map(vec![
        (Value::string("a"), Value::number(1.0)),
        (Value::string("b"), Value::number(2.0)),
    ]);
    assert_eq!(map.inspect(5), "(a: 1, b: 2)");
}

#[test]
fn test_render_compressed() {
    let list = Value::list(vec![px(1.0), px(2.0)], Separator::Comma);
    let options = RenderOptions::default().compressed(true);
    assert_eq!(list.render(options), "1px,2px");
}

#[test]
fn test_expanded_value_is_shared() {
    let list = Value::list(vec![px(1.0)], Separator::Space);
    let copy = list.clone();
    match (&list, &copy) {
        (Value::List(a), Value::List(b)) => assert!(Heap::ptr_eq(a, b)),
        _ => panic!("expected lists"),
    }
}

proptest! {
    #[test]
    fn number_equality_is_reflexive(
        v in -1.0e6f64..1.0e6,
        unit in prop::sample::select(vec!["px", "em", "%", "s", ""])
    ) {
        let n = Value::dimension(v, unit);
        prop_assert!(n.equals(&n));
    }

    #[test]
    fn string_equality_is_reflexive(text in "[a-z ]{0,12}") {
        let s = Value::quoted(text.clone());
        prop_assert!(s.equals(&s));
        prop_assert!(s.equals(&Value::string(text)));
    }

    #[test]
    fn length_conversion_round_trips(v in -1.0e4f64..1.0e4) {
        let inches = Number::with_unit(v, "in");
        let px = inches.convert_to(&Unit::single("px")).unwrap();
        let back = px.convert_to(&Unit::single("in")).unwrap();
        prop_assert!((back.value - v).abs() < 1e-9);
    }
}
