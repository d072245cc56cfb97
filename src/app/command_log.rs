//! Sitzungsprotokoll der ausgeführten Commands mit ihrem Ergebnis.
//!
//! Aufgenommen werden nur Commands mit [`AppCommand::journal_text`]. Zeiger-,
//! Scroll- und Viewport-Commands fallen bei jedem Frame an und bleiben draußen.

use super::AppCommand;
use std::collections::VecDeque;

/// Ergebnis eines protokollierten Commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Ausgeführt (auch wenn sich am Modell nichts geändert hat)
    Applied,
    /// Mit Fehlermeldung abgebrochen
    Failed(String),
}

/// Ein Eintrag im Protokoll
#[derive(Debug, Clone)]
pub struct LoggedCommand {
    /// Fortlaufende Nummer innerhalb der Sitzung
    pub sequence: u64,
    pub command: AppCommand,
    pub outcome: CommandOutcome,
}

impl LoggedCommand {
    /// Einzeilige Darstellung für das Protokollfenster.
    pub fn summary(&self) -> String {
        let text = self.command.journal_text().unwrap_or_default();
        match &self.outcome {
            CommandOutcome::Applied => format!("#{} {}", self.sequence, text),
            CommandOutcome::Failed(message) => {
                format!("#{} {} fehlgeschlagen: {}", self.sequence, text, message)
            }
        }
    }
}

/// Begrenztes Protokoll; bei Überlauf fällt der älteste Eintrag weg.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    capacity: usize,
    next_sequence: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    const DEFAULT_CAPACITY: usize = 200;

    /// Erstellt ein leeres Protokoll mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 1,
        }
    }

    /// Nimmt einen Command auf, bevor er ausgeführt wird.
    ///
    /// Liefert die Sequenznummer oder `None`, wenn der Command nicht
    /// protokolliert wird.
    pub fn record(&mut self, command: &AppCommand) -> Option<u64> {
        command.journal_text()?;
        if self.capacity == 0 {
            return None;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push_back(LoggedCommand {
            sequence,
            command: command.clone(),
            outcome: CommandOutcome::Applied,
        });
        Some(sequence)
    }

    /// Markiert einen aufgenommenen Command als fehlgeschlagen.
    pub fn mark_failed(&mut self, sequence: u64, message: impl Into<String>) {
        if let Some(entry) = self.entries.iter_mut().rev().find(|e| e.sequence == sequence) {
            entry.outcome = CommandOutcome::Failed(message.into());
        }
    }

    /// Einträge, ältester zuerst
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LoggedCommand> {
        self.entries.iter()
    }

    /// Jüngster Eintrag
    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.back()
    }

    /// Anzahl fehlgeschlagener Einträge
    pub fn failure_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, CommandOutcome::Failed(_)))
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
