use scraper::ElementRef;

pub const DATE_UNAVAILABLE: &str = "Fecha no disponible";

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>().trim().to_string()
}

/// Splits a quiniela heading such as `"Quiniela Nacional, Matutina. 05-06-2024"`
/// into the draw name (before the first comma) and the date (after the last
/// period).
pub fn split_quiniela_heading(heading: &str) -> (String, String) {
    let name = heading.split(',').next().unwrap_or(heading).trim().to_string();
    let date = match heading.rsplit_once('.') {
        Some((_, date)) => date.trim().to_string(),
        None => DATE_UNAVAILABLE.to_string(),
    };
    (name, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_date() {
        let (name, date) = split_quiniela_heading("Quiniela Nacional, Matutina. 05-06-2024");
        assert_eq!(name, "Quiniela Nacional");
        assert_eq!(date, "05-06-2024");
    }

    #[test]
    fn heading_without_period_has_no_date() {
        let (name, date) = split_quiniela_heading("Quiniela de Mendoza, Vespertina");
        assert_eq!(name, "Quiniela de Mendoza");
        assert_eq!(date, DATE_UNAVAILABLE);
    }

    #[test]
    fn heading_without_comma_keeps_whole_text_as_name() {
        let (name, date) = split_quiniela_heading("Primera del dia. 01-02-2024");
        assert_eq!(name, "Primera del dia. 01-02-2024");
        assert_eq!(date, "01-02-2024");
    }

    #[test]
    fn date_comes_after_the_last_period() {
        let (_, date) = split_quiniela_heading("Quiniela Nacional, Nocturna. Sorteo N. 21-03-2024");
        assert_eq!(date, "21-03-2024");
    }
}
