/// One entry of the option menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// first order gradient magnitude.
    Sobel,
    /// hysteresis edge extraction.
    Canny,
    /// second order derivative response.
    Laplacian,
    /// gaussian blur of the color image.
    GaussianSmooth,
    /// median filter of the color image.
    MedianFilter,
    /// leave the session.
    Exit,
}

/// Menu entries in display order.
pub const MENU_CHOICES: [MenuChoice; 6] = [
    MenuChoice::Sobel,
    MenuChoice::Canny,
    MenuChoice::Laplacian,
    MenuChoice::GaussianSmooth,
    MenuChoice::MedianFilter,
    MenuChoice::Exit,
];

/// Header printed above the menu entries.
pub const MENU_HEADER: &str = "--- Select an option ---";

impl MenuChoice {
    /// Parse the operator's raw line, surrounding whitespace is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use edgelab::menu::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Canny));
    /// assert_eq!(MenuChoice::parse(" 6\n"), Some(MenuChoice::Exit));
    /// assert_eq!(MenuChoice::parse("7"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::Sobel,
            "2" => MenuChoice::Canny,
            "3" => MenuChoice::Laplacian,
            "4" => MenuChoice::GaussianSmooth,
            "5" => MenuChoice::MedianFilter,
            "6" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }

    /// The number the operator types to pick this entry.
    pub fn key(&self) -> u8 {
        match self {
            MenuChoice::Sobel => 1,
            MenuChoice::Canny => 2,
            MenuChoice::Laplacian => 3,
            MenuChoice::GaussianSmooth => 4,
            MenuChoice::MedianFilter => 5,
            MenuChoice::Exit => 6,
        }
    }

    /// Label shown in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Sobel => "Sobel Edge Detection",
            MenuChoice::Canny => "Canny Edge Detection",
            MenuChoice::Laplacian => "Laplacian Edge Detection",
            MenuChoice::GaussianSmooth => "Gaussian Smoothing",
            MenuChoice::MedianFilter => "Median Filtering",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Render the full menu block, starting with an empty line.
pub fn render() -> String {
    let mut menu = format!("\n{}", MENU_HEADER);
    for choice in MENU_CHOICES {
        menu.push_str(&format!("\n{}. {}", choice.key(), choice.label()));
    }
    menu
}

#[cfg(test)]
mod tests {
    use super::{render, MenuChoice, MENU_CHOICES};

    #[test]
    fn keys_round_trip() {
        for choice in MENU_CHOICES {
            assert_eq!(MenuChoice::parse(&choice.key().to_string()), Some(choice));
        }
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["", "0", "7", "one", "1.0", "12", "exit"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn render_lists_all_entries() {
        let menu = render();
        let lines: Vec<&str> = menu.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "--- Select an option ---");
        assert_eq!(lines[2], "1. Sobel Edge Detection");
        assert_eq!(lines[7], "6. Exit");
    }
}
