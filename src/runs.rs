use crate::diff::{Edit, EditType};
use log::debug;
use serde::Serialize;
use std::fmt;

/// A maximal stretch of consecutive edits sharing one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRun {
    /// Index of the first edit of the run in the edit script.
    pub start: usize,
    pub tag: EditType,
    pub text: String,
    /// Number of edits merged into the run.
    pub tokens: usize,
}

impl EditRun {
    fn open(start: usize, tag: EditType, text: &str) -> Self {
        EditRun {
            start,
            tag,
            text: text.to_string(),
            tokens: 1,
        }
    }

    fn extend(&mut self, text: &str) {
        self.text.push_str(text);
        self.tokens += 1;
    }

    /// Index one past the last edit of the run.
    pub fn end(&self) -> usize {
        self.start + self.tokens
    }

    /// Length of the run's text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for EditRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "positions {} - {}: {} {}",
            self.start,
            self.end(),
            self.tag,
            self.text
        )
    }
}

/// Merges an edit script into runs, one edit at a time.
///
/// Holds at most one open run per edit type. When an edit of a new type
/// arrives, the open run of another type is closed before a new one starts.
#[derive(Debug, Default)]
pub struct RunMerger {
    open: [Option<EditRun>; 3],
    runs: Vec<EditRun>,
}

impl RunMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, tag: EditType, text: &str) {
        if let Some(run) = &mut self.open[tag.index()] {
            run.extend(text);
            return;
        }

        for other in tag.others() {
            if let Some(run) = self.open[other.index()].take() {
                self.runs.push(run);
                break;
            }
        }

        self.open[tag.index()] = Some(EditRun::open(index, tag, text));
    }

    pub fn finish(mut self) -> Vec<EditRun> {
        for slot in self.open.iter_mut() {
            if let Some(run) = slot.take() {
                self.runs.push(run);
            }
        }

        self.runs
    }
}

pub fn merge_runs(edits: &[Edit]) -> Vec<EditRun> {
    let mut merger = RunMerger::new();

    for (i, edit) in edits.iter().enumerate() {
        merger.push(i, edit.r#type, edit.text());
    }

    let runs = merger.finish();
    debug!("merged {} edits into {} runs", edits.len(), runs.len());

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::Token;

    fn edits(script: &[(EditType, &str)]) -> Vec<Edit> {
        script
            .iter()
            .enumerate()
            .map(|(i, (tag, text))| {
                let token = Token::new(i, text);
                match tag {
                    EditType::Eql => Edit::eql(token.clone(), token),
                    EditType::Del => Edit::del(token),
                    EditType::Ins => Edit::ins(token),
                }
            })
            .collect()
    }

    fn summary(runs: &[EditRun]) -> Vec<(usize, EditType, &str)> {
        runs.iter()
            .map(|run| (run.start, run.tag, run.text.as_str()))
            .collect()
    }

    #[test]
    fn it_merges_nothing() {
        assert!(merge_runs(&[]).is_empty());
    }

    #[test]
    fn it_merges_consecutive_edits() {
        use EditType::*;

        let runs = merge_runs(&edits(&[
            (Eql, "a "),
            (Eql, "b "),
            (Del, "c "),
            (Del, "d "),
            (Ins, "e "),
            (Eql, "f"),
        ]));

        assert_eq!(
            summary(&runs),
            vec![(0, Eql, "a b "), (2, Del, "c d "), (4, Ins, "e "), (5, Eql, "f")]
        );
        assert_eq!(runs[1].tokens, 2);
        assert_eq!(runs[0].char_len(), 4);
        assert_eq!(runs[1].end(), 4);
    }

    #[test]
    fn a_single_edit_is_a_single_run() {
        let runs = merge_runs(&edits(&[(EditType::Ins, "only")]));

        assert_eq!(summary(&runs), vec![(0, EditType::Ins, "only")]);
    }

    #[test]
    fn alternating_types_never_merge() {
        use EditType::*;

        let runs = merge_runs(&edits(&[(Del, "x "), (Ins, "y "), (Del, "z "), (Ins, "w")]));

        assert_eq!(runs.len(), 4);
        assert!(runs.windows(2).all(|pair| pair[0].tag != pair[1].tag));
    }

    #[test]
    fn it_displays_positions() {
        let runs = merge_runs(&edits(&[
            (EditType::Eql, "insert "),
            (EditType::Ins, "a "),
            (EditType::Ins, "revised "),
        ]));

        assert_eq!(runs[0].to_string(), "positions 0 - 1:   insert ");
        assert_eq!(runs[1].to_string(), "positions 1 - 3: + a revised ");
    }
}
