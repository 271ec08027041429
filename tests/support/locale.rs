use std::str::FromStr;

use unic_langid::LanguageIdentifier;

/// Wrapper parsing locale values supplied via behaviour-driven steps.
#[derive(Clone, Debug)]
pub struct StepLocale {
    locale: LanguageIdentifier,
}

impl FromStr for StepLocale {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''));
        let locale = raw
            .parse()
            .map_err(|_| format!("step locale `{raw}` is not a valid language identifier"))?;

        Ok(Self { locale })
    }
}

impl StepLocale {
    /// Consumes the step value, yielding the parsed locale.
    pub fn into_inner(self) -> LanguageIdentifier {
        self.locale
    }
}
