// ABOUTME: Output formats for the break-slides application
// ABOUTME: Beamer (LaTeX) and Quarto (reveal.js) templates behind one strategy trait

use crate::tabbycat::BreakRecord;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Title slide information shared by both decks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckMeta {
    pub tournament: String,
    /// Absolute or folder-relative path of `background.png`, when the folder has one
    pub background: Option<PathBuf>,
}

/// Templates for one output markup.
///
/// The layout engine decides what goes on which slide; a format only decides
/// how each piece is spelled. Fragments are returned complete with their
/// trailing newlines so the renderer can concatenate them directly.
pub trait SlideFormat {
    /// Human readable name used in logs
    fn name(&self) -> &'static str;

    /// Name of the deck file written into the tournament folder
    fn file_name(&self) -> &'static str;

    /// Escape text that is inserted verbatim into the markup
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Document header and title slide
    fn preamble(&self, meta: &DeckMeta) -> String;

    /// Document footer
    fn closing(&self) -> String;

    /// Centered section title slide
    fn section(&self, title: &str) -> String;

    /// Blank slide shown before a reveal
    fn safety_slide(&self, label: &str) -> String;

    /// One list entry
    fn item(&self, entry: &str) -> String;

    /// An itemized list around already rendered items
    fn list(&self, items: &str) -> String;

    /// One half-width column around a rendered list
    fn column(&self, body: &str) -> String;

    /// A titled slide holding rendered columns, numbered when `counter` is set
    fn slide(&self, title: &str, counter: Option<(usize, usize)>, columns: &str) -> String;

    /// Announcement slide for one breaking team
    fn record_slide(&self, category: &str, ordinal: &str, record: &BreakRecord) -> String;
}

fn counter_suffix(counter: Option<(usize, usize)>) -> String {
    match counter {
        Some((current, total)) => format!(" ({}/{})", current, total),
        None => String::new(),
    }
}

/// LaTeX beamer deck, compiled to PDF with pdflatex
#[derive(Debug, Clone, Copy, Default)]
pub struct Beamer;

/// Quarto markdown deck, rendered to reveal.js HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct Quarto;

/// Escape LaTeX special characters
pub fn escape_latex(text: &str) -> Cow<'_, str> {
    const SPECIALS: &[char] = &['\\', '&', '%', '$', '#', '_', '{', '}', '~', '^'];
    if !text.contains(SPECIALS) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Define `\<name>` as a file path, read with `% # & _ ~ $ ^` as plain characters.
///
/// Escaping with backslashes would change the file name graphicx looks up.
pub fn latex_path_macro(name: &str, path: &Path) -> String {
    // LaTeX wants forward slashes even on Windows
    let path = path.to_string_lossy().replace('\\', "/");
    format!(
        "\\begingroup\\catcode`\\%=12 \\catcode`\\#=12 \\catcode`\\&=12 \\catcode`\\_=12 \\catcode`\\~=12 \\catcode`\\$=12 \\catcode`\\^=12\n\\gdef\\{}{{{}}}\\endgroup\n",
        name, path
    )
}

impl SlideFormat for Beamer {
    fn name(&self) -> &'static str {
        "beamer"
    }

    fn file_name(&self) -> &'static str {
        "break_slides.tex"
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape_latex(text)
    }

    fn preamble(&self, meta: &DeckMeta) -> String {
        let mut doc = String::from(
            r"\documentclass[20pt, aspectratio=169]{beamer}

\definecolor{myblue}{rgb}{0.2, 0.2, 0.8}

\usepackage[sfdefault]{FiraSans}
\usepackage[T1]{fontenc}
\renewcommand*\oldstylenums[1]{{\firaoldstyle #1}}
",
        );

        if let Some(background) = &meta.background {
            doc.push_str(&format!(
                r"
\usepackage{{graphicx}}

\setbeamercolor{{frametitle}}{{fg=myblue!70!black}}
\setbeamerfont{{frametitle}}{{family=\normalsize}}

{}
\setbeamertemplate{{background}}
{{\includegraphics[width=\paperwidth, height=\paperheight]{{\breakbackground}}}}
",
                latex_path_macro("breakbackground", background)
            ));
        }

        doc.push_str(&format!(
            r"
\beamertemplatenavigationsymbolsempty
\setbeamersize{{text margin left=4mm, text margin right=4mm}}

\begin{{document}}

\begin{{frame}} \center
\huge \textbf{{\color{{myblue}} {}}} \\[1em]
\Large \textbf{{\color{{myblue!50!black}} Break announcement}}
\end{{frame}}

",
            self.escape(&meta.tournament)
        ));
        doc
    }

    fn closing(&self) -> String {
        "\\end{document}\n".to_string()
    }

    fn section(&self, title: &str) -> String {
        format!(
            "\\begin{{frame}}\\center\n\\textbf{{\\color{{myblue}}\\Large {}}}\n\\end{{frame}}\n\n",
            self.escape(title)
        )
    }

    fn safety_slide(&self, label: &str) -> String {
        format!(
            "\\begin{{frame}} \\center\n\\Large {}\n\\end{{frame}}\n\n",
            self.escape(label)
        )
    }

    fn item(&self, entry: &str) -> String {
        format!("\\item {}\\\\\n", self.escape(entry))
    }

    fn list(&self, items: &str) -> String {
        format!("\\begin{{itemize}}\n{}\\end{{itemize}}\n", items)
    }

    fn column(&self, body: &str) -> String {
        format!("\\column{{0.5\\textwidth}}\n{}", body)
    }

    fn slide(&self, title: &str, counter: Option<(usize, usize)>, columns: &str) -> String {
        format!(
            "\\begin{{frame}}{{{}{}}} \\small\n\\begin{{columns}}\n{}\\end{{columns}}\n\\end{{frame}}\n\n",
            self.escape(title),
            counter_suffix(counter),
            columns
        )
    }

    fn record_slide(&self, category: &str, ordinal: &str, record: &BreakRecord) -> String {
        format!(
            "\\begin{{frame}}\\center\nBreaking {} {}\\\\\n\
             \\vspace{{1em}}\\textbf{{\\color{{myblue}}\\large {}}} \\\\[0.6em]\n\
             on {} team points \\\\[0.6em]\n\
             and {} speaker points.\n\
             \\end{{frame}}\n\n",
            ordinal,
            self.escape(category),
            self.escape(&record.team),
            record.team_points,
            record.speaker_points
        )
    }
}

impl SlideFormat for Quarto {
    fn name(&self) -> &'static str {
        "quarto"
    }

    fn file_name(&self) -> &'static str {
        "break_slides.qmd"
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }

    fn preamble(&self, meta: &DeckMeta) -> String {
        // Double quoted YAML scalars
        let tournament = meta.tournament.replace('\\', "\\\\").replace('"', "\\\"");
        let mut doc = format!(
            "---\ntitle: \"Break announcement\"\nsubtitle: \"{}\"\n",
            tournament
        );
        if meta.background.is_some() {
            doc.push_str("background-image: background.png\n");
        }
        doc.push_str(&format!(
            "format:\n    revealjs:\n        footer: \"{} -- Break announcement\"\n        incremental: true\n---\n",
            tournament
        ));
        doc
    }

    fn closing(&self) -> String {
        String::new()
    }

    fn section(&self, title: &str) -> String {
        format!("\n# {} {{.center}}\n\n", title)
    }

    fn safety_slide(&self, label: &str) -> String {
        format!("\n## {} {{.center}}\n", label)
    }

    fn item(&self, entry: &str) -> String {
        format!("- {}\n", entry)
    }

    fn list(&self, items: &str) -> String {
        format!("\n{}\n", items)
    }

    fn column(&self, body: &str) -> String {
        format!("::: {{.column width=\"50%\"}}\n{}:::\n", body)
    }

    fn slide(&self, title: &str, counter: Option<(usize, usize)>, columns: &str) -> String {
        format!(
            "## {}{}\n:::: {{.columns}}\n{}::::\n\n",
            title,
            counter_suffix(counter),
            columns
        )
    }

    fn record_slide(&self, _category: &str, ordinal: &str, record: &BreakRecord) -> String {
        format!(
            "## Breaking {} {{.center}}\n\n### __{}__\n\non {} team points\n\nand {} speaker points\n\n",
            ordinal, record.team, record.team_points, record.speaker_points
        )
    }
}
