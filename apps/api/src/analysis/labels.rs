//! Human-readable labels for empty-field paths, as shown in the results view.

/// Label for an empty-field path, ignoring array indices.
///
/// `experience[2].company` resolves like `experience.company`. Returns `None`
/// for paths outside the scored layout, including the empty root path.
pub fn field_label(path: &str) -> Option<&'static str> {
    let label = match strip_indices(path).as_str() {
        "contact" => "Suas Informações de Contato",
        "contact.name" => "Seu Nome",
        "contact.email" => "Seu Email",
        "contact.phone" => "Seu Telefone",
        "contact.address" => "Seu Endereço",
        "contact.linkedIn" => "Seu LinkedIn",
        "skills" => "Campo Habilidades",
        "experience" => "Experiências Profissionais",
        "experience.role" => "O Cargo de Trabalho",
        "experience.company" => "A Empresa em que Trabalhou",
        "experience.startDate" => "Data de Início da Experiência Profissional",
        "experience.endDate" => "Data de Término da Experiência Profissional",
        "education" => "Formação Acadêmica",
        "education.institution" => "Instituição de Ensino",
        "education.degree" => "Grau Acadêmico Obtido",
        "education.startDate" => "Data de Início da Experiência Acadêmica",
        "education.endDate" => "Data de Término da Experiência Acadêmica",
        _ => return None,
    };
    Some(label)
}

/// Removes every `[...]` segment from a path.
fn strip_indices(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut depth = 0usize;
    for c in path.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_labels() {
        assert_eq!(field_label("contact.email"), Some("Seu Email"));
        assert_eq!(field_label("contact.linkedIn"), Some("Seu LinkedIn"));
    }

    #[test]
    fn test_indexed_paths_resolve() {
        assert_eq!(
            field_label("experience[0].company"),
            Some("A Empresa em que Trabalhou")
        );
        assert_eq!(
            field_label("education[12].degree"),
            Some("Grau Acadêmico Obtido")
        );
        assert_eq!(field_label("skills[0]"), Some("Campo Habilidades"));
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(field_label("skills"), Some("Campo Habilidades"));
        assert_eq!(field_label("education"), Some("Formação Acadêmica"));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(field_label(""), None);
        assert_eq!(field_label("contact.github"), None);
    }

    #[test]
    fn test_strip_indices() {
        assert_eq!(strip_indices("a[0].b[10][2].c"), "a.b.c");
        assert_eq!(strip_indices("plain"), "plain");
    }
}
