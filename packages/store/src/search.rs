//! Case-insensitive search over titles and authors.

use crate::models::Cifra;

pub fn matches(cifra: &Cifra, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || cifra.titulo.to_lowercase().contains(&query)
        || cifra.autor.to_lowercase().contains(&query)
}

/// Keep the cifras matching `query`, in their original order.
pub fn filter(cifras: Vec<Cifra>, query: &str) -> Vec<Cifra> {
    cifras.into_iter().filter(|c| matches(c, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn cifra(titulo: &str, autor: &str) -> Cifra {
        Cifra {
            id: titulo.to_string(),
            titulo: titulo.to_string(),
            autor: autor.to_string(),
            texto: String::new(),
            video_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_by_title_or_author() {
        let all = vec![
            cifra("Garota de Ipanema", "tom"),
            cifra("Asa Branca", "luiz"),
            cifra("Águas de Março", "Tom"),
        ];

        let found = filter(all.clone(), "TOM");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].titulo, "Garota de Ipanema");
        assert_eq!(found[1].titulo, "Águas de Março");

        assert_eq!(filter(all.clone(), "branca").len(), 1);
        assert_eq!(filter(all.clone(), "  ").len(), 3);
        assert!(filter(all, "samba").is_empty());
    }
}
