use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

/// An OpenTDB question, either still encoded or already decoded.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub type_field: String,
    pub category: String,
    pub question: String,
    pub difficulty: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    /// Only meaningful once the question has been decoded.
    pub fn parsed_type(&self) -> Option<QuestionType> {
        self.type_field.parse().ok()
    }

    pub fn parsed_difficulty(&self) -> Option<Difficulty> {
        self.difficulty.parse().ok()
    }

    pub fn parsed_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaResponse {
    pub response_code: ResponseCode,
    #[serde(default)]
    pub results: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub response_code: ResponseCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRepr, strum::Display)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ResponseCode {
    Success = 0,
    NoResults = 1,
    InvalidParameter = 2,
    TokenNotFound = 3,
    TokenEmpty = 4,
    RateLimit = 5,
}

impl ResponseCode {
    pub fn is_success(self) -> bool {
        self == ResponseCode::Success
    }
}

impl TryFrom<u8> for ResponseCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_repr(code).ok_or_else(|| format!("unknown response code {}", code))
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> Self {
        code as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, FromRepr, strum::Display)]
#[repr(u8)]
pub enum Category {
    #[strum(serialize = "General Knowledge")]
    GeneralKnowledge = 9,
    #[strum(serialize = "Entertainment: Books")]
    Books = 10,
    #[strum(serialize = "Entertainment: Film")]
    Film = 11,
    #[strum(serialize = "Entertainment: Music")]
    Music = 12,
    #[strum(serialize = "Entertainment: Musicals & Theatres")]
    MusicalsAndTheatres = 13,
    #[strum(serialize = "Entertainment: Television")]
    Television = 14,
    #[strum(serialize = "Entertainment: Video Games")]
    VideoGames = 15,
    #[strum(serialize = "Entertainment: Board Games")]
    BoardGames = 16,
    #[strum(serialize = "Science & Nature")]
    ScienceAndNature = 17,
    #[strum(serialize = "Science: Computers")]
    Computers = 18,
    #[strum(serialize = "Science: Mathematics")]
    Mathematics = 19,
    #[strum(serialize = "Mythology")]
    Mythology = 20,
    #[strum(serialize = "Sports")]
    Sports = 21,
    #[strum(serialize = "Geography")]
    Geography = 22,
    #[strum(serialize = "History")]
    History = 23,
    #[strum(serialize = "Politics")]
    Politics = 24,
    #[strum(serialize = "Art")]
    Art = 25,
    #[strum(serialize = "Celebrities")]
    Celebrities = 26,
    #[strum(serialize = "Animals")]
    Animals = 27,
    #[strum(serialize = "Vehicles")]
    Vehicles = 28,
    #[strum(serialize = "Entertainment: Comics")]
    Comics = 29,
    #[strum(serialize = "Science: Gadgets")]
    Gadgets = 30,
    #[strum(serialize = "Entertainment: Japanese Anime & Manga")]
    AnimeAndManga = 31,
    #[strum(serialize = "Entertainment: Cartoon & Animations")]
    CartoonAndAnimations = 32,
}

/// Offset between the 1-based category index shown to users and the API id.
const CATEGORY_INDEX_OFFSET: u8 = 8;

impl Category {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::from_repr(id)
    }

    /// `1..=24`, in API id order.
    pub fn from_index(index: u8) -> Option<Self> {
        index
            .checked_add(CATEGORY_INDEX_OFFSET)
            .and_then(Self::from_repr)
    }

    pub fn index(self) -> u8 {
        self.id() - CATEGORY_INDEX_OFFSET
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    #[strum(to_string = "", serialize = "any")]
    Any,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QuestionType {
    #[default]
    #[strum(to_string = "", serialize = "any")]
    Any,
    /// Multiple choice
    Multiple,
    /// True or false
    Boolean,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// How the API encodes the text of returned questions.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Encoding {
    /// `Don&#039;t forget that &pi; = 3.14 &amp; doesn&#039;t equal 3.`
    #[default]
    #[strum(to_string = "", serialize = "html")]
    HtmlCodes,
    /// RFC 3986: `Don%27t%20forget%20that%20%CF%80%20%3D%203.14%20%26%20doesn%27t%20equal%203.`
    #[strum(to_string = "url3986", serialize = "url")]
    Url,
    /// `RG9uJ3QgZm9yZ2V0IHRoYXQgz4AgPSAzLjE0ICYgZG9lc24ndCBlcXVhbCAzLg==`
    #[strum(serialize = "base64")]
    Base64,
}

impl Encoding {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
