//! VB.NET lexeme patterns and the matcher protocol
//!
//! Patterns are data, not code: each category owns one regex, and the engine
//! only ever asks a matcher for its non-overlapping candidate ranges over the
//! whole text. Where a pattern needs surrounding context to decide a match
//! (a numeric literal must not begin inside an identifier), the context stays
//! outside capture group 1 and only the captured range is reported.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::lexeme::LexemeCategory;

/// Numeric literals: floats, scientific notation, `&H` hexadecimal, and
/// decimal integers, each with an optional leading sign. The non-capturing
/// prefix requires start-of-text or a non-word character, so a literal never
/// starts inside an identifier or a longer digit run.
const NUMBER_PATTERN: &str = concat!(
    r"(?:^|\W)(",
    // floats
    r"[+-]?\d+\.\d+(?:[eE][+-]?\d+)?",
    r"|[+-]?(?:[1-9]\d*|0)[eE][+-]?\d+",
    // hexadecimal
    r"|[+-]?&H[0-9a-fA-F]+",
    // decimal integers
    r"|[+-]?(?:[1-9]\d*|0)",
    r")",
);

/// Reserved words, matched case-sensitively and only when followed by
/// whitespace. The trailing `\s` is consumed outside the capture; whitespace
/// can never begin a keyword, so the consumption does not hide any candidate.
const KEYWORD_PATTERN: &str = concat!(
    r"(AddHandler|AddressOf|Alias|And|AndAlso|As|Boolean|ByRef|Byte|ByVal",
    r"|Call|Case|Catch|CBool|CByte|CChar|CDate|CDbl|CDec|Char|CInt|Class",
    r"|CLng|CObj|Const|Continue|CSByte|CShort|CSng|CStr|CType|CUInt|CULng",
    r"|CUShort|Date|Decimal|Declare|Default|Delegate|Dim|DirectCast|Do",
    r"|Double|Each|Else|ElseIf|End|EndIf|Enum|Erase|Error|Event|Exit|False",
    r"|Finally|For|Friend|Function|Get|GetType|GetXMLNamespace|Global|GoSub",
    r"|GoTo|Handles|If|Implements|Imports|In|Inherits|Integer|Interface|Is",
    r"|IsNot|Let|Lib|Like|Long|Loop|Me|Mod|Module|MustInherit|MustOverride",
    r"|MyBase|MyClass|Namespace|Narrowing|New|Next|Not|Nothing",
    r"|NotInheritable|NotOverridable|Object|Of|On|Operator|Option|Optional",
    r"|Or|OrElse|Out|Overloads|Overridable|Overrides|ParamArray|Partial",
    r"|Private|Property|Protected|Public|RaiseEvent|ReadOnly|ReDim|REM",
    r"|RemoveHandler|Resume|Return|SByte|Select|Set|Shadows|Shared|Short",
    r"|Single|Static|Step|Stop|String|Structure|Sub|SyncLock|Then|Throw|To",
    r"|True|Try|TryCast|UInteger|ULong|UShort|Using|Variant|Wend|When|While",
    r"|Widening|With|WithEvents|WriteOnly|Xor|#Else",
    r")\s",
);

/// Single-quote comment running to the end of the line.
const COMMENT_PATTERN: &str = r"('.*)";

/// Double-quoted string or character literal; `""` is the embedded-quote
/// escape, and the body may span lines.
const STR_CHAR_PATTERN: &str = r#"("(?:[^"]|"")*")"#;

/// Symbolic and word operators. Alternation order is observable under
/// leftmost-first matching (`<` listed before `<=` splits `<=` into two
/// spans) and is kept as the language data defines it.
const OPERATOR_PATTERN: &str = concat!(
    // Await operator
    r"(Await",
    // arithmetic and concatenation operators
    r"|\^|\+|-|\*|/|\\|Mod|&|<<|>>",
    // comparison operators
    r"|=|<>|<|<=|>|>=|IsNot|Is|Like|TypeOf",
    // logical and bitwise operators
    r"|Not|And|AndAlso|Or|OrElse|Xor)",
);

/// Single punctuation delimiters.
const DELIMITER_PATTERN: &str = r#"([;,:{}()\[\]'\\."_])"#;

/// Identifiers: underscore-plus-word-character or letter head, word tail.
const IDENTIFIER_PATTERN: &str = r"((?:_\w|[[:alpha:]])\w*)";

/// Preprocessor directives, including the block forms that span lines.
const DIRECTIVE_PATTERN: &str = concat!(
    r"(#Const\s.*",
    r"|#ExternalSource[\s\S]+#End ExternalSource",
    r"|#If .* Then[\s\S]+#End If",
    r"|#Region[\s\S]*#End Region.*",
    r"|#(?:Disable|Enable)\s[^\n]+(?:(?:\n(?:[[:blank:]]+[^\n]*)?)*\n[[:blank:]][^\n]*)?",
    r")",
);

/// The built-in VB.NET pattern per category, in
/// [`CLASSIFICATION_ORDER`](super::lexeme::CLASSIFICATION_ORDER).
const VB_PATTERNS: &[(LexemeCategory, &str)] = &[
    (LexemeCategory::Directive, DIRECTIVE_PATTERN),
    (LexemeCategory::Comment, COMMENT_PATTERN),
    (LexemeCategory::StrChar, STR_CHAR_PATTERN),
    (LexemeCategory::Number, NUMBER_PATTERN),
    (LexemeCategory::Operator, OPERATOR_PATTERN),
    (LexemeCategory::Keyword, KEYWORD_PATTERN),
    (LexemeCategory::Identifier, IDENTIFIER_PATTERN),
    (LexemeCategory::Delimiter, DELIMITER_PATTERN),
];

/// Compiled built-in set, shared by every `MatcherSet::vb` call.
static VB_MATCHERS: Lazy<Result<MatcherSet, PatternError>> =
    Lazy::new(|| MatcherSet::from_patterns(VB_PATTERNS));

/// A category's pattern failed to compile.
///
/// Surfaced when a matcher set is built, before any text is scanned.
#[derive(Debug, Clone)]
pub struct PatternError {
    pub category: LexemeCategory,
    pub source: regex::Error,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} pattern: {}", self.category, self.source)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A compiled pattern for one lexeme category.
///
/// Matchers are pure functions of the input text: they never consult the
/// span table, and their own candidates never overlap each other because
/// matching resumes past the end of every match.
#[derive(Debug, Clone)]
pub struct Matcher {
    category: LexemeCategory,
    regex: Regex,
}

impl Matcher {
    pub fn new(category: LexemeCategory, pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError { category, source })?;
        Ok(Self { category, regex })
    }

    pub fn category(&self) -> LexemeCategory {
        self.category
    }

    /// Every place the pattern matches, left to right, as `(start, len)`
    /// byte ranges.
    ///
    /// The reported range is capture group 1 when the pattern defines one,
    /// so context consumed purely for disambiguation stays out of the
    /// candidate. A numeric candidate directly followed by a digit is
    /// dropped: that digit proves the literal started mid-run (a lone `0` in
    /// front of `123`), an exclusion the regex crate cannot express without
    /// lookahead.
    pub fn candidates<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
        let category = self.category;
        self.regex.captures_iter(text).filter_map(move |caps| {
            let m = caps.get(1).or_else(|| caps.get(0))?;
            if category == LexemeCategory::Number
                && text
                    .as_bytes()
                    .get(m.end())
                    .map_or(false, |b| b.is_ascii_digit())
            {
                return None;
            }
            Some((m.start(), m.end() - m.start()))
        })
    }
}

/// A full complement of matchers, held in the order they should run.
#[derive(Debug, Clone)]
pub struct MatcherSet {
    matchers: Vec<Matcher>,
}

impl MatcherSet {
    /// The built-in VB.NET matcher set.
    pub fn vb() -> Result<Self, PatternError> {
        VB_MATCHERS.clone()
    }

    /// Build a matcher set from external per-category pattern data.
    ///
    /// Matchers run in the order given; callers wanting the standard
    /// disambiguation semantics should supply patterns in
    /// [`CLASSIFICATION_ORDER`](super::lexeme::CLASSIFICATION_ORDER).
    pub fn from_patterns(patterns: &[(LexemeCategory, &str)]) -> Result<Self, PatternError> {
        let matchers = patterns
            .iter()
            .map(|&(category, pattern)| Matcher::new(category, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matchers })
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }
}
