//! Call-site sugar for building trees without spelling out `Value`s

/// Build a property bag (or style map): `props! { "id" => "a", "hidden" => true }`
#[macro_export]
macro_rules! props {
    () => {
        $crate::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::Object::new();
        $(object.insert($key, $value);)+
        object
    }};
}

/// Build an HTML node: `h!("a.b", props! { "href" => "/" }, "text")`
///
/// Each argument goes through `Value::from`, so property bags, strings,
/// numbers, nodes and vectors mix freely.
#[macro_export]
macro_rules! h {
    ($selector:expr $(, $arg:expr)* $(,)?) => {
        $crate::html().create(
            ::std::option::Option::Some($selector),
            ::std::vec![$($crate::Value::from($arg)),*],
        )
    };
}

/// Build an SVG node: `s!("circle", props! { "cx" => 5 })`
#[macro_export]
macro_rules! s {
    ($selector:expr $(, $arg:expr)* $(,)?) => {
        $crate::svg().create(
            ::std::option::Option::Some($selector),
            ::std::vec![$($crate::Value::from($arg)),*],
        )
    };
}
