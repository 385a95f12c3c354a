//! Label templates for the glyph tooltip segments.

use std::borrow::Cow;

/// Templates wrapped around each formatted segment
///
/// Templates use positional placeholders (`{0}`, `{1}`) and `{{` / `}}` for
/// literal braces, as resource strings do. A placeholder with no matching
/// argument, or any other brace text, is written verbatim. The defaults
/// produce the bare segments; hosts can swap in localized text such as
/// `"IL offset {0}"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphLabels
{
    /// `{0}` = 1-based line, `{1}` = 1-based character
    pub line_character: Cow<'static, str>,
    /// `{0}` = IL offset text (`0x002A`, `~0x002A`, `(prolog)`, ...)
    pub il_offset: Cow<'static, str>,
    /// `{0}` = native address text (`0x00400010`)
    pub native_address: Cow<'static, str>,
}

impl Default for GlyphLabels
{
    fn default() -> Self
    {
        Self {
            line_character: Cow::Borrowed("line {0}, character {1}"),
            il_offset: Cow::Borrowed("{0}"),
            native_address: Cow::Borrowed("{0}"),
        }
    }
}

/// Substitute positional placeholders in `template`.
///
/// ```rust
/// use glyphfmt_core::glyph::labels::format_template;
///
/// assert_eq!(format_template("line {0}, character {1}", &["3", "7"]), "line 3, character 7");
/// assert_eq!(format_template("{0} {2}", &["a"]), "a {2}");
/// assert_eq!(format_template("{{{0}}}", &["x"]), "{x}");
/// ```
#[must_use]
pub fn format_template(template: &str, args: &[&str]) -> String
{
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut rest = template;
    while let Some(brace) = rest.find(['{', '}']) {
        out.push_str(&rest[..brace]);
        let tail = &rest[brace..];
        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let after = &tail[1..];
        let substituted = after.find('}').and_then(|close| {
            let index = after[..close].parse::<usize>().ok()?;
            let arg = args.get(index)?;
            Some((*arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
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
