use std::str::FromStr;

pub const MENU_TEXT: &str = "Options:
1. Enroll in a course
2. View balance
3. Pay tuition
4. Show status
5. Exit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Enroll,
    ViewBalance,
    PayTuition,
    ShowStatus,
    Exit,
}

///anything that isn't one of the five options
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidChoice;

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "1" => Self::Enroll,
            "2" => Self::ViewBalance,
            "3" => Self::PayTuition,
            "4" => Self::ShowStatus,
            "5" => Self::Exit,
            _ => return Err(InvalidChoice),
        })
    }
}
