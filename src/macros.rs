// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! status_filter {
    // Filter group with one option per status variant:
    // status_filter!("Status", NeedStatus::ALL, |r: &ResourceNeed| r.status)
    ($name:expr, $variants:expr, $get:expr) => {{
        let mut group = $crate::table::FilterGroup::new($name);
        for &st in $variants {
            let get = $get;
            group = group.option(st.label(), st.value(), move |r| get(r) == st);
        }
        group
    }};
}
