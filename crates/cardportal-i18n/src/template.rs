//! `{placeholder}` substitution on already-translated text.
//!
//! This is deliberately not a templating engine: a placeholder is the
//! literal text `{name}` and gets replaced by the literal value. There is
//! no escaping, so a translated string that genuinely needs to show
//! `{username}` cannot do so when a `username` argument is supplied.

/// Replaces every `{name}` in `template` whose name appears in `args`.
///
/// Works in a single left-to-right pass and never rescans inserted values,
/// so the result is the same whatever order `args` are given in, even when
/// a value itself looks like a placeholder. Unknown placeholders and stray
/// braces are left as they are.
pub fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
