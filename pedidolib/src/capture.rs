//! Сборка фразы из событий распознавателя речи.
//!
//! Конец фразы приходит явным событием `Boundary` от источника речи
//! (например, после паузы `CaptureConfig::silence_ms`), а не от общего таймера.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// Промежуточный вариант текущего куска, может быть заменён.
    Partial(String),
    /// Окончательный текст куска.
    Final(String),
    /// Фраза закончена.
    Boundary,
}

#[derive(Debug, Default)]
pub struct UtteranceAssembler {
    finals: String,
    partial: String,
}

impl UtteranceAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Принимает событие; на `Boundary` отдаёт собранную фразу, если она не пустая.
    pub fn push(&mut self, event: TranscriptEvent) -> Option<String> {
        match event {
            TranscriptEvent::Partial(text) => {
                self.partial = text;
                None
            }
            TranscriptEvent::Final(text) => {
                self.finals.push_str(&text);
                self.partial.clear();
                None
            }
            TranscriptEvent::Boundary => {
                let utterance = self.current();
                self.reset();
                if utterance.is_empty() {
                    None
                } else {
                    tracing::debug!(utterance = %utterance, "utterance complete");
                    Some(utterance)
                }
            }
        }
    }

    /// Текст на данный момент: окончательные куски плюс промежуточный.
    pub fn current(&self) -> String {
        format!("{}{}", self.finals, self.partial).trim().to_string()
    }

    pub fn reset(&mut self) {
        self.finals.clear();
        self.partial.clear();
    }
}
