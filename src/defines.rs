//! Line classification and flag rewriting for config headers.
//!
//! A config header is processed one line at a time. Each line is classified
//! exactly once, and macro-definition lines are rewritten into the `-D`
//! flag form that a PlatformIO `build_flags` list expects.

/// Marker for a macro-definition line. The trailing space is part of the
/// marker, so directives like `#defined` or `#define(` do not qualify.
pub const DEFINE_MARKER: &str = "#define ";

/// Prefix that expresses a macro definition as a command-line flag.
pub const FLAG_PREFIX: &str = "-D";

/// Marker for a single-line comment. The trailing space is part of the
/// marker, matching how generated config headers space their comments.
pub const COMMENT_MARKER: &str = "// ";

/// INI-style comment character, the replacement for `//` when a comment
/// line is neutralized.
pub const INI_COMMENT: &str = ";";

/// Classification of one input line.
///
/// A line containing both markers is a [`LineKind::MacroDefine`]; the
/// macro-definition handling wins, and any trailing comment text rides
/// along into the output untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Contains `#define ` somewhere; rewritten into a `-D` flag.
    MacroDefine,
    /// Contains `// ` but no macro definition; produces no output.
    Comment,
    /// Anything else; produces no output.
    Other,
}

/// Classifies a single input line.
pub fn classify(line: &str) -> LineKind {
    if line.contains(DEFINE_MARKER) {
        LineKind::MacroDefine
    } else if line.contains(COMMENT_MARKER) {
        LineKind::Comment
    } else {
        LineKind::Other
    }
}

/// Rewrites a macro-definition line as a `-D` build flag.
///
/// Every occurrence of `#define ` is replaced with `-D`; all other bytes of
/// the line (macro name, value, trailing comment, line terminator) are kept
/// as-is.
pub fn to_build_flag(line: &str) -> String {
    line.replace(DEFINE_MARKER, FLAG_PREFIX)
}

/// Rewrites a C single-line comment into INI form.
///
/// Every occurrence of `//` (no trailing space required) becomes `;`. The
/// conversion pipeline does not emit the result; comment lines are inert
/// there and this rewrite is offered for callers assembling their own
/// `platformio.ini` sections.
pub fn neutralize_comment(line: &str) -> String {
    line.replace("//", INI_COMMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_macro_define() {
        assert_eq!(classify("#define FOO 1"), LineKind::MacroDefine);
        assert_eq!(classify("#define BAR"), LineKind::MacroDefine);
        // Indented or mid-line markers still qualify.
        assert_eq!(classify("  #define BAZ 2"), LineKind::MacroDefine);
    }

    #[test]
    fn test_classify_comment() {
        assert_eq!(classify("// display wiring"), LineKind::Comment);
        assert_eq!(classify("int x; // trailing"), LineKind::Comment);
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify("#include \"Arduino.h\""), LineKind::Other);
        assert_eq!(classify("#ifdef USE_SD"), LineKind::Other);
        assert_eq!(classify(""), LineKind::Other);
        // No trailing space after the directive.
        assert_eq!(classify("#define"), LineKind::Other);
        // Slashes without the trailing space are not a comment marker.
        assert_eq!(classify("//comment"), LineKind::Other);
    }

    #[test]
    fn test_classify_define_wins_over_comment() {
        assert_eq!(classify("#define DBG // enable"), LineKind::MacroDefine);
    }

    #[test]
    fn test_to_build_flag_name_only() {
        assert_eq!(to_build_flag("#define DRV_DISP_TFT_ESPI"), "-DDRV_DISP_TFT_ESPI");
    }

    #[test]
    fn test_to_build_flag_with_value() {
        assert_eq!(to_build_flag("#define GSLC_ROTATE 1"), "-DGSLC_ROTATE 1");
    }

    #[test]
    fn test_to_build_flag_keeps_terminator_and_trailing_text() {
        assert_eq!(to_build_flag("#define DBG // enable\n"), "-DDBG // enable\n");
        assert_eq!(to_build_flag("#define ADAGFX_SD_CS 4\r\n"), "-DADAGFX_SD_CS 4\r\n");
    }

    #[test]
    fn test_to_build_flag_replaces_every_occurrence() {
        assert_eq!(to_build_flag("#define A #define B"), "-DA -DB");
    }

    #[test]
    fn test_neutralize_comment() {
        assert_eq!(neutralize_comment("// rotation"), "; rotation");
        assert_eq!(neutralize_comment("//a //b"), ";a ;b");
        assert_eq!(neutralize_comment("no comment"), "no comment");
    }
}
