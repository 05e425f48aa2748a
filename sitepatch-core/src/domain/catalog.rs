// sitepatch-core/src/domain/catalog.rs
//
// Fragments expected in a generated GX data-docs page and what replaces them.
// Any change to the upstream page layout lands here, not in the pipeline.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::markup::{self, ElementShape};

pub const FOOTER_BLOCK: &str = "footer-block";
pub const ROW_CLICK_SCRIPT: &str = "row-click-script";
pub const SCRIPT_THEN_FOOTER: &str = "script-then-footer";
pub const EXPECTATION_SUITES_TAB: &str = "expectation-suites-tab";

/// Marker text of the GX site footer.
pub const FOOTER_MARKER: &str = "Stay current on everything GX with our newsletter";

/// Closing `</div>` tags between the row-click script and the footer.
const FOOTER_DIV_DEPTH: usize = 9;

const ROW_CLICK_SCRIPT_REGEX: &str = r##"\$\(document\)\.ready\(function\(\)\s*\{\s*\$\("#section-1-content-block-2-2-body-table"\)\.on\('click-row\.bs\.table',\s*function\(e,\s*row,\s*\$element\)\s*\{\s*window\.location\s*=\s*\$element\.data\("href"\);\s*\}\)\s*\}\s*\);\s*"##;

pub const NAVIGATION_TABS: &str = r##"<li class="nav-item">
  <a aria-controls="Expectation-Suites" aria-selected="false" class="nav-link" data-toggle="tab" href="#Expectation-Suites" id="Expectation-Suites-tab" role="tab">
    Expectation Suites
  </a>
</li>
<li class="nav-item">
  <a aria-controls="Profiling-Results" aria-selected="false" class="nav-link" data-toggle="tab" href="#Profiling-Results" id="Profiling-Results-tab" role="tab">
    Profiling Results
  </a>
</li>
"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternRole {
    StructuralCheck,
    ContentBlock,
    NavigationTab,
}

impl PatternRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StructuralCheck => "structural-check",
            Self::ContentBlock => "content-block",
            Self::NavigationTab => "navigation-tab",
        }
    }
}

impl fmt::Display for PatternRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum Matcher {
    /// Regex over canonical text, `.` matching newlines.
    Text(Regex),
    /// Tree-shape predicate over the parsed document.
    Shape(ElementShape),
}

impl Matcher {
    pub fn count_matches(&self, text: &str) -> usize {
        match self {
            Matcher::Text(regex) => regex.find_iter(text).count(),
            Matcher::Shape(shape) => shape.count_in(&markup::parse(text)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    role: PatternRole,
    matcher: Matcher,
    replacement: Option<String>,
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn role(&self) -> PatternRole {
        self.role
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct PatternCatalog {
    footer_block: Pattern,
    row_click_script: Pattern,
    script_then_footer: Pattern,
    expectation_suites_tab: Pattern,
}

impl PatternCatalog {
    /// Build the catalog. `content_block` is the markup that replaces the
    /// script + footer span (read from the companion text asset).
    pub fn new(content_block: impl Into<String>) -> Result<Self, DomainError> {
        let closes = r"\s*</div>".repeat(FOOTER_DIV_DEPTH);
        let footer_regex = format!(
            r"</script>{}\s*<footer>\s*<p>\s*{}",
            closes,
            regex::escape(FOOTER_MARKER)
        );
        let combined_regex = format!("{}{}", ROW_CLICK_SCRIPT_REGEX, footer_regex);

        Ok(Self {
            footer_block: Pattern {
                name: FOOTER_BLOCK,
                role: PatternRole::StructuralCheck,
                matcher: Matcher::Text(compile(FOOTER_BLOCK, &footer_regex)?),
                replacement: None,
            },
            row_click_script: Pattern {
                name: ROW_CLICK_SCRIPT,
                role: PatternRole::StructuralCheck,
                matcher: Matcher::Text(compile(ROW_CLICK_SCRIPT, ROW_CLICK_SCRIPT_REGEX)?),
                replacement: None,
            },
            script_then_footer: Pattern {
                name: SCRIPT_THEN_FOOTER,
                role: PatternRole::ContentBlock,
                matcher: Matcher::Text(compile(SCRIPT_THEN_FOOTER, &combined_regex)?),
                replacement: Some(content_block.into()),
            },
            expectation_suites_tab: Pattern {
                name: EXPECTATION_SUITES_TAB,
                role: PatternRole::NavigationTab,
                matcher: Matcher::Shape(expectation_suites_tab_shape()),
                replacement: Some(NAVIGATION_TABS.to_string()),
            },
        })
    }

    pub fn footer_block(&self) -> &Pattern {
        &self.footer_block
    }

    pub fn row_click_script(&self) -> &Pattern {
        &self.row_click_script
    }

    pub fn script_then_footer(&self) -> &Pattern {
        &self.script_then_footer
    }

    pub fn expectation_suites_tab(&self) -> &Pattern {
        &self.expectation_suites_tab
    }

    /// Checks gating the content-block rewrite, in evaluation order.
    pub fn rewrite_checks(&self) -> [&Pattern; 3] {
        [
            &self.footer_block,
            &self.row_click_script,
            &self.script_then_footer,
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        [
            &self.footer_block,
            &self.row_click_script,
            &self.script_then_footer,
            &self.expectation_suites_tab,
        ]
        .into_iter()
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex, DomainError> {
    RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .build()
        .map_err(|e| DomainError::InvalidPattern {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn expectation_suites_tab_shape() -> ElementShape {
    ElementShape::new("li").with_class("nav-item").with_child(
        ElementShape::new("a")
            .with_attr("class", "nav-link")
            .with_attr("aria-selected", "false")
            .with_attr("id", "Expectation-Suites-tab")
            .with_attr("href", "#Expectation-Suites")
            .with_attr("data-toggle", "tab")
            .with_attr("role", "tab")
            .with_attr("aria-controls", "Expectation-Suites")
            .with_text("Expectation Suites"),
    )
}
