/// Lexicographic permutations of `0..n`, starting with the identity.
pub(super) struct Permutations {
    current: Vec<usize>,
    done: bool,
}

impl Permutations {
    pub(super) fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            done: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.done = !advance(&mut self.current);
        Some(item)
    }
}

/// Step to the next ordering; false once the last one was reached.
fn advance(v: &mut [usize]) -> bool {
    let Some(i) = (1..v.len()).rev().find(|&i| v[i - 1] < v[i]) else {
        return false;
    };
    let pivot = i - 1;
    // A larger element exists to the right of the pivot by construction.
    let Some(j) = (i..v.len()).rev().find(|&j| v[j] > v[pivot]) else {
        return false;
    };
    v.swap(pivot, j);
    v[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_elements() {
        let all: Vec<_> = Permutations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_counts() {
        assert_eq!(Permutations::new(0).count(), 1);
        assert_eq!(Permutations::new(1).count(), 1);
        assert_eq!(Permutations::new(5).count(), 120);
    }
}
