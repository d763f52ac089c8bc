//! Layout of the generated bootstrap file.

use std::sync::OnceLock;

use regex::Regex;

/// Renders the bootstrap file from its use block and modules list.
#[must_use]
pub fn render(use_block: &str, modules_list: &str) -> String {
    format!(
        "<?php\n\n/** This file is auto generated, do not edit */\n\ndeclare(strict_types=1);\n\n{use_block}\n\nreturn [\n    'modules' => [\n{modules_list}\n    ]\n];\n"
    )
}

/// Bootstrap file with no use statements and an empty modules list.
#[must_use]
pub fn skeleton() -> String {
    render("", "")
}

fn sections_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"declare\S+\s*;\s+([\s\S]*)\s+return\s+\[\s+'modules'\s+=>\s+\[\s+([\s\S]+)\s+\]\s+",
        )
        .expect("bootstrap sections pattern is valid")
    })
}

/// The editable parts of a bootstrap file: the use block and the modules list.
///
/// Both are kept as raw text so existing lines survive a rewrite untouched;
/// new entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSections {
    use_block: String,
    modules_list: String,
}

impl ConfigSections {
    /// Extracts the sections from file text, or `None` if the text does not
    /// have the bootstrap shape.
    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        let captures = sections_pattern().captures(content)?;
        let use_block = captures.get(1).map_or("", |m| m.as_str());
        Some(Self {
            use_block: format!("{}\n", use_block.trim()),
            modules_list: format!("{}\n", captures[2].trim()),
        })
    }

    /// Returns `true` if `class_name` is already referenced in the modules list.
    #[must_use]
    pub fn contains(&self, class_name: &str) -> bool {
        self.modules_list.contains(&format!("{class_name}::class"))
    }

    /// Appends a `use` statement and a list entry for a module.
    pub fn append(&mut self, fqcn: &str, class_name: &str) {
        self.modules_list.push_str(&format!("\t\t{class_name}::class,\n"));
        self.use_block.push_str(&format!("use {fqcn};\n"));
    }

    /// Renders the full file from the current sections.
    #[must_use]
    pub fn render(&self) -> String {
        render(self.use_block.trim(), &format!("\t\t{}", self.modules_list.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POPULATED: &str = "<?php\n\n/** This file is auto generated, do not edit */\n\ndeclare(strict_types=1);\n\nuse Router\\RouterModule;\nuse Auth\\AuthModule;\n\nreturn [\n    'modules' => [\n\t\tRouterModule::class,\n\t\tAuthModule::class,\n    ]\n];\n";

    #[test]
    fn skeleton_has_the_bootstrap_shape() {
        let sections = ConfigSections::parse(&skeleton()).unwrap();
        assert!(!sections.contains("RouterModule"));
    }

    #[test]
    fn parses_existing_entries() {
        let sections = ConfigSections::parse(POPULATED).unwrap();
        assert!(sections.contains("RouterModule"));
        assert!(sections.contains("AuthModule"));
        assert!(!sections.contains("BlogModule"));
    }

    #[test]
    fn rendering_unchanged_sections_reproduces_the_file() {
        let sections = ConfigSections::parse(POPULATED).unwrap();
        assert_eq!(sections.render(), POPULATED);
    }

    #[test]
    fn append_into_skeleton() {
        let mut sections = ConfigSections::parse(&skeleton()).unwrap();
        sections.append("Router\\RouterModule", "RouterModule");

        assert_eq!(
            sections.render(),
            render("use Router\\RouterModule;", "\t\tRouterModule::class,")
        );
    }

    #[test]
    fn append_keeps_existing_lines() {
        let mut sections = ConfigSections::parse(POPULATED).unwrap();
        sections.append("Blog\\BlogModule", "BlogModule");

        let rendered = sections.render();
        assert!(rendered.contains(
            "use Router\\RouterModule;\nuse Auth\\AuthModule;\nuse Blog\\BlogModule;\n"
        ));
        assert!(rendered.contains(
            "\t\tRouterModule::class,\n\t\tAuthModule::class,\n\t\tBlogModule::class,\n    ]"
        ));
    }

    #[test]
    fn foreign_files_have_no_sections() {
        assert!(ConfigSections::parse("<?php\nreturn ['debug' => true];\n").is_none());
        assert!(ConfigSections::parse("").is_none());
    }
}
