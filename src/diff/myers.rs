use crate::diff::{Aligner, Edit, Token};
use log::trace;
use std::ops::{Index, IndexMut};

/// Myers' greedy shortest-edit-script algorithm.
///
/// Where a change both removes and adds tokens, the backtrack emits the
/// deletions first.
#[derive(Debug, Default, Clone, Copy)]
pub struct Myers;

impl Aligner for Myers {
    fn align(&self, a: &[Token], b: &[Token]) -> Vec<Edit> {
        let mut diff = vec![];

        for (prev_x, prev_y, x, y) in backtrack(a, b) {
            if x == prev_x {
                diff.push(Edit::ins(b[prev_y as usize].clone()));
            } else if y == prev_y {
                diff.push(Edit::del(a[prev_x as usize].clone()));
            } else {
                diff.push(Edit::eql(
                    a[prev_x as usize].clone(),
                    b[prev_y as usize].clone(),
                ));
            }
        }

        diff.reverse();
        diff
    }
}

/// Furthest-reaching x for each diagonal k, for k in `-max - 1..=max + 1`.
#[derive(Debug)]
struct Frontier {
    offset: isize,
    xs: Vec<isize>,
}

impl Frontier {
    fn new(max: isize) -> Self {
        Frontier {
            offset: max + 1,
            xs: vec![0; (2 * max + 3) as usize],
        }
    }

    /// Copy of the diagonals `-d - 1..=d + 1`, the only ones read when
    /// backtracking through depth `d`.
    fn window(&self, d: isize) -> Frontier {
        let lo = (self.offset - d - 1) as usize;
        let hi = (self.offset + d + 1) as usize;

        Frontier {
            offset: d + 1,
            xs: self.xs[lo..=hi].to_vec(),
        }
    }

    /// Whether diagonal `k` at depth `d` is reached by moving down from k + 1.
    fn moves_down(&self, k: isize, d: isize) -> bool {
        k == -d || (k != d && self[k - 1] < self[k + 1])
    }
}

impl Index<isize> for Frontier {
    type Output = isize;

    fn index(&self, k: isize) -> &isize {
        &self.xs[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut isize {
        &mut self.xs[(k + self.offset) as usize]
    }
}

/// Walk the trace back from (n, m), yielding each step as
/// `(prev_x, prev_y, x, y)` in reverse order.
fn backtrack(a: &[Token], b: &[Token]) -> Vec<(isize, isize, isize, isize)> {
    let mut x = a.len() as isize;
    let mut y = b.len() as isize;
    let mut result = vec![];

    for (d, v) in shortest_edit(a, b).iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;

        let prev_k = if v.moves_down(k, d) { k + 1 } else { k - 1 };
        let prev_x = v[prev_k];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            result.push((x - 1, y - 1, x, y));
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            result.push((prev_x, prev_y, x, y));
        }

        x = prev_x;
        y = prev_y;
    }

    result
}

/// Record the frontier before each depth until one reaches (n, m).
#[allow(clippy::many_single_char_names)]
fn shortest_edit(a: &[Token], b: &[Token]) -> Vec<Frontier> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;

    let mut v = Frontier::new(max);
    let mut trace = vec![];

    for d in 0..=max {
        trace.push(v.window(d));

        for k in (-d..=d).step_by(2) {
            let mut x = if v.moves_down(k, d) {
                v[k + 1]
            } else {
                v[k - 1] + 1
            };
            let mut y = x - k;

            while x < n && y < m && a[x as usize].text == b[y as usize].text {
                x += 1;
                y += 1;
            }

            v[k] = x;

            if x >= n && y >= m {
                trace!("shortest edit script found at depth {}", d);
                return trace;
            }
        }
    }

    unreachable!("an edit script of length n + m always exists");
}
