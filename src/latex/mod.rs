//! Pure text transforms from character content to LaTeX markup, plus the
//! `pdflatex` typesetter.
//!
//! Descriptions are written in a small reStructuredText subset:
//! paragraphs separated by blank lines, `**bold**`, `*emphasis*`, double
//! backtick literals, `-`/`*` bullet lists and headings underlined with
//! `=`, `-` or `~`.

mod typesetter;

pub use typesetter::LatexTypesetter;

use once_cell::sync::Lazy;
use regex::Regex;
use sheetwright_content::{spell_level_label, AbilityScores, Monster, NamedText, Spell};

static LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"``(.+?)``").expect("BUG: invalid LITERAL_RE regex literal")
});

static STRONG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(.+?)\*\*").expect("BUG: invalid STRONG_RE regex literal")
});

static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*([^*\s][^*]*?)\*").expect("BUG: invalid EMPHASIS_RE regex literal")
});

/// Escapes characters that LaTeX treats specially.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

fn inline(text: &str) -> String {
    let escaped = escape(text);
    let literal = LITERAL_RE.replace_all(&escaped, r"\texttt{$1}");
    let strong = STRONG_RE.replace_all(&literal, r"\textbf{$1}");
    EMPHASIS_RE.replace_all(&strong, r"\emph{$1}").into_owned()
}

fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

fn is_underline(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty()
        && ['=', '-', '~']
            .iter()
            .any(|marker| line.chars().all(|c| c == *marker))
}

fn convert_block(lines: &[&str]) -> String {
    if let [title, underline] = lines {
        if is_underline(underline) && !title.trim().is_empty() {
            return format!(r"\subsubsection*{{{}}}", inline(title.trim()));
        }
    }

    if bullet_text(lines[0]).is_some() {
        let mut items: Vec<String> = Vec::new();
        for line in lines {
            match (bullet_text(line), items.last_mut()) {
                (Some(text), _) => items.push(text.trim().to_string()),
                // Continuation of the previous item.
                (None, Some(item)) => {
                    item.push(' ');
                    item.push_str(line.trim());
                }
                (None, None) => {}
            }
        }
        let body: String = items
            .iter()
            .map(|item| format!("  \\item {}\n", inline(item)))
            .collect();
        return format!("\\begin{{itemize}}\n{body}\\end{{itemize}}");
    }

    let paragraph = lines.iter().map(|l| l.trim()).collect::<Vec<_>>().join(" ");
    inline(&paragraph)
}

/// Converts reStructuredText-flavoured prose to LaTeX.
pub fn rst_to_latex(text: &str) -> String {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(convert_block(&current));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(convert_block(&current));
    }
    blocks.join("\n\n")
}

/// Like [`rst_to_latex`], framed.
pub fn rst_to_boxlatex(text: &str) -> String {
    format!("\\begin{{framed}}\n{}\n\\end{{framed}}", rst_to_latex(text))
}

fn spell_level_line(spell: &Spell) -> String {
    let school = escape(&spell.school);
    let mut line = if spell.level == 0 {
        format!("{school} cantrip")
    } else {
        format!("{}-level {}", spell_level_label(spell.level), school.to_lowercase())
    };
    if spell.ritual {
        line.push_str(" (ritual)");
    }
    line
}

/// The stat block printed under a spell's heading.
pub fn spell_info(spell: &Spell) -> String {
    let duration = if spell.concentration {
        format!("Concentration, {}", escape(&spell.duration))
    } else {
        escape(&spell.duration)
    };
    let mut out = format!(
        "\\textit{{{}}}\n\n\\begin{{description}}[noitemsep]\n  \\item[Casting Time] {}\n  \\item[Range] {}\n  \\item[Components] {}\n  \\item[Duration] {}\n\\end{{description}}",
        spell_level_line(spell),
        escape(&spell.casting_time),
        escape(&spell.range),
        escape(&spell.components),
        duration,
    );
    if !spell.description.trim().is_empty() {
        out.push_str("\n\n");
        out.push_str(&rst_to_latex(&spell.description));
    }
    out
}

fn named_entries(title: &str, entries: &[NamedText]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let body: String = entries
        .iter()
        .map(|e| format!("\\textbf{{\\textit{{{}.}}}} {}\n\n", escape(&e.name), rst_to_latex(&e.text)))
        .collect();
    format!("\\paragraph{{{title}}}\n\n{body}")
}

/// A monster stat block: defences, ability table, traits and actions.
pub fn monster_info(monster: &Monster) -> String {
    let abilities = monster.abilities.labelled();
    let header: Vec<&str> = abilities.iter().map(|(label, _)| *label).collect();
    let scores: Vec<String> = abilities
        .iter()
        .map(|(_, score)| format!("{} ({:+})", score, AbilityScores::modifier(*score)))
        .collect();

    let mut out = String::new();
    if !monster.kind.is_empty() {
        out.push_str(&format!("\\textit{{{}}}\n\n", escape(&monster.kind)));
    }
    out.push_str(&format!(
        "\\textbf{{Armor Class}} {}\\\\\n\\textbf{{Hit Points}} {}\\\\\n\\textbf{{Speed}} {}\n\n",
        monster.armor_class,
        monster.hit_points,
        escape(&monster.speed),
    ));
    out.push_str(&format!(
        "\\begin{{tabular}}{{cccccc}}\n{} \\\\\n{} \\\\\n\\end{{tabular}}\n\n",
        header.join(" & "),
        scores.join(" & "),
    ));
    for (label, value) in [
        ("Senses", &monster.senses),
        ("Languages", &monster.languages),
        ("Challenge", &monster.challenge_rating),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("\\textbf{{{label}}} {}\\\\\n", escape(value)));
        }
    }
    out.push('\n');
    out.push_str(&named_entries("Traits", &monster.traits));
    out.push_str(&named_entries("Actions", &monster.actions));
    if !monster.description.trim().is_empty() {
        out.push_str(&rst_to_latex(&monster.description));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape("50% & $5_x"), r"50\% \& \$5\_x");
        assert_eq!(escape(r"a\b"), r"a\textbackslash{}b");
        assert_eq!(escape("{~^}"), r"\{\textasciitilde{}\textasciicircum{}\}");
    }

    #[test]
    fn inline_markup() {
        assert_eq!(
            rst_to_latex("Deal **double** damage with *style* using ``roll``."),
            r"Deal \textbf{double} damage with \emph{style} using \texttt{roll}."
        );
    }

    #[test]
    fn paragraphs_and_lists() {
        let text = "First line\ncontinues here.\n\n- one\n- two\n  wraps\n\nLast.";
        let latex = rst_to_latex(text);
        let blocks: Vec<&str> = latex.split("\n\n").collect();
        assert_eq!(blocks[0], "First line continues here.");
        assert_eq!(
            blocks[1],
            "\\begin{itemize}\n  \\item one\n  \\item two wraps\n\\end{itemize}"
        );
        assert_eq!(blocks[2], "Last.");
    }

    #[test]
    fn underlined_headings() {
        assert_eq!(rst_to_latex("Usage\n====="), r"\subsubsection*{Usage}");
        // A lone line of dashes is not a heading.
        assert_eq!(rst_to_latex("----"), "----");
    }

    #[test]
    fn boxed_wraps_in_frame() {
        let boxed = rst_to_boxlatex("*Rage*");
        assert!(boxed.starts_with("\\begin{framed}\n\\emph{Rage}"));
        assert!(boxed.ends_with("\\end{framed}"));
    }

    #[test]
    fn spell_info_lines() {
        let spell = Spell {
            name: "Detect Magic".into(),
            level: 1,
            school: "Divination".into(),
            casting_time: "1 action".into(),
            range: "Self".into(),
            components: "V, S".into(),
            duration: "Up to 10 minutes".into(),
            ritual: true,
            concentration: true,
            description: String::new(),
        };
        let info = spell_info(&spell);
        assert!(info.starts_with(r"\textit{1st-level divination (ritual)}"));
        assert!(info.contains(r"\item[Duration] Concentration, Up to 10 minutes"));

        let cantrip = Spell { name: "Light".into(), school: "Evocation".into(), ..Default::default() };
        assert!(spell_info(&cantrip).starts_with(r"\textit{Evocation cantrip}"));
    }

    #[test]
    fn monster_block() {
        let wolf = Monster {
            name: "Wolf".into(),
            kind: "Medium beast".into(),
            armor_class: 13,
            hit_points: 11,
            speed: "40 ft.".into(),
            abilities: AbilityScores { strength: 12, dexterity: 15, ..Default::default() },
            actions: vec![NamedText { name: "Bite".into(), text: "+4 to hit".into() }],
            ..Default::default()
        };
        let block = monster_info(&wolf);
        assert!(block.contains(r"\textbf{Armor Class} 13"));
        assert!(block.contains("STR & DEX & CON & INT & WIS & CHA"));
        assert!(block.contains("12 (+1) & 15 (+2) & 10 (+0)"));
        assert!(block.contains(r"\textbf{\textit{Bite.}} +4 to hit"));
        assert!(!block.contains("Traits"));
    }
}
