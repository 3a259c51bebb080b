use super::domain::Section;

pub const PLACEHOLDER_A: &str = "{a}";
pub const PLACEHOLDER_B: &str = "{b}";

/// Substitutes display names into template text.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRenderer<'n> {
    a_name: &'n str,
    b_name: &'n str,
}

impl<'n> NarrativeRenderer<'n> {
    pub fn new(a_name: &'n str, b_name: &'n str) -> Self {
        Self { a_name, b_name }
    }

    pub fn render(&self, section: Section, text: &str) -> String {
        if section.uses_bare_subjects() {
            self.substitute(&bare_subjects_to_placeholders(text))
        } else {
            self.substitute(text)
        }
    }

    // Single pass, so names are never rescanned for placeholders.
    fn substitute(&self, text: &str) -> String {
        let mut rendered = String::with_capacity(text.len() + self.a_name.len() + self.b_name.len());
        let mut rest = text;

        while let Some(start) = rest.find('{') {
            rendered.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix(PLACEHOLDER_A) {
                rendered.push_str(self.a_name);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(PLACEHOLDER_B) {
                rendered.push_str(self.b_name);
                rest = after;
            } else {
                rendered.push('{');
                rest = &tail[1..];
            }
        }

        rendered.push_str(rest);
        rendered
    }
}

/// Rewrites whole-token `A` / `B` subjects into placeholders.
fn bare_subjects_to_placeholders(text: &str) -> String {
    let mut rewritten = String::with_capacity(text.len() + 8);
    let mut token = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            token.push(ch);
        } else {
            flush_token(&mut rewritten, &mut token);
            rewritten.push(ch);
        }
    }
    flush_token(&mut rewritten, &mut token);

    rewritten
}

fn flush_token(out: &mut String, token: &mut String) {
    match token.as_str() {
        "A" => out.push_str(PLACEHOLDER_A),
        "B" => out.push_str(PLACEHOLDER_B),
        other => out.push_str(other),
    }
    token.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_replaced_in_every_section() {
        let renderer = NarrativeRenderer::new("Maya", "Jonas");
        let text = renderer.render(Section::Safety, "{a} and {b} agree; {a} listens.");
        assert_eq!(text, "Maya and Jonas agree; Maya listens.");
    }

    #[test]
    fn bare_letters_are_rewritten_only_for_the_loop() {
        let renderer = NarrativeRenderer::new("Maya", "Jonas");
        let source = "A pushes, B's reply is short. A and B repeat.";

        assert_eq!(
            renderer.render(Section::Loop, source),
            "Maya pushes, Jonas's reply is short. Maya and Jonas repeat."
        );
        assert_eq!(renderer.render(Section::Triggers, source), source);
    }

    #[test]
    fn bare_letter_pass_leaves_longer_tokens_alone() {
        let renderer = NarrativeRenderer::new("Maya", "Jonas");
        assert_eq!(
            renderer.render(Section::Loop, "AB and Bo met A."),
            "AB and Bo met Maya."
        );
    }

    #[test]
    fn names_containing_placeholders_are_not_rescanned() {
        let renderer = NarrativeRenderer::new("{b}", "B");
        assert_eq!(renderer.render(Section::Loop, "A then {b}"), "{b} then B");
    }

    #[test]
    fn unmatched_braces_pass_through() {
        let renderer = NarrativeRenderer::new("Maya", "Jonas");
        assert_eq!(
            renderer.render(Section::MentalMap, "{x} {a"),
            "{x} {a"
        );
    }
}
