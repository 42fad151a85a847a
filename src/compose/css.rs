//! Minimal CSS text writer.
//!
//! Only what the composer emits: plain rules (optionally with a multi-layer
//! value such as stacked `background-image` gradients) and `@keyframes`.

use std::fmt;

const INDENT: &str = "    ";

#[derive(Debug, Clone)]
enum DeclValue {
    Single(String),
    Layers(Vec<String>),
}

/// One selector block.
#[derive(Debug, Clone)]
pub struct Rule {
    selector: String,
    decls: Vec<(&'static str, DeclValue)>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            decls: Vec::new(),
        }
    }

    pub fn decl(mut self, property: &'static str, value: impl fmt::Display) -> Self {
        self.decls
            .push((property, DeclValue::Single(value.to_string())));
        self
    }

    /// Comma-separated value written one layer per line.
    pub fn layers(mut self, property: &'static str, layers: Vec<String>) -> Self {
        self.decls.push((property, DeclValue::Layers(layers)));
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for (property, value) in &self.decls {
            match value {
                DeclValue::Single(text) => writeln!(f, "{INDENT}{property}: {text};")?,
                DeclValue::Layers(layers) => {
                    writeln!(f, "{INDENT}{property}:")?;
                    let last = layers.len().saturating_sub(1);
                    for (i, layer) in layers.iter().enumerate() {
                        let end = if i == last { ';' } else { ',' };
                        writeln!(f, "{INDENT}{INDENT}{layer}{end}")?;
                    }
                }
            }
        }
        write!(f, "}}")
    }
}

/// An `@keyframes` block whose steps are written one per line.
#[derive(Debug, Clone)]
pub struct Keyframes {
    name: String,
    steps: Vec<(u8, Vec<(&'static str, String)>)>,
}

impl Keyframes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, percent: u8, decls: Vec<(&'static str, String)>) -> Self {
        self.steps.push((percent, decls));
        self
    }
}

impl fmt::Display for Keyframes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@keyframes {} {{", self.name)?;
        for (percent, decls) in &self.steps {
            write!(f, "{INDENT}{percent}% {{")?;
            for (property, value) in decls {
                write!(f, " {property}: {value};")?;
            }
            writeln!(f, " }}")?;
        }
        write!(f, "}}")
    }
}

/// Join rendered blocks with a blank line between them.
pub fn join_blocks<I, T>(blocks: I) -> String
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    blocks
        .into_iter()
        .map(|block| block.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
