//! Seeded inputs for the partition sort tests and benchmarks, plus operation streams for the
//! growable array.
//!
//! All generators draw from one seed per process, printed by the sort tests. Set
//! `OVERRIDE_SEED=<u64>` to replay a run.

use std::env;
use std::ops::Range;
use std::sync::{Mutex, PoisonError};

use rand::distributions::Uniform;
use rand::prelude::*;

// --- Sort inputs ---

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Values drawn from `range`. Small ranges produce many duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();

    seeded_rng().sample_iter(dist).take(len).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Worst case for a last-element pivot, every partition peels off a single element.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into `saw_count` runs, each sorted up or down at random.
pub fn saws(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 {
        return v;
    }

    let run_len = (len / saw_count.max(1)).max(1);
    let mut rng = seeded_rng();

    for run in v.chunks_mut(run_len) {
        run.sort_unstable();
        if rng.gen::<bool>() {
            run.reverse();
        }
    }

    v
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);

    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}

// --- Growable array workloads ---

/// One step of a growable array workload, see [`array_ops`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArrayOp {
    Add(i32),
    Insert(usize, i32),
    Set(usize, i32),
    Get(usize),
    RemoveAt(usize),
    RemoveValue(i32),
    Clear,
}

const VALUE_DOMAIN: Range<i32> = 0..64;

/// Generates `len` array operations.
///
/// Indices are drawn from `0..=size + 1` for the size the array has at that step, so a share of
/// the indexed operations is out of range. Values come from a small domain to make
/// `RemoveValue` hit existing elements. `Clear` is rare so workloads build up real sizes.
pub fn array_ops(len: usize) -> Vec<ArrayOp> {
    let mut rng = seeded_rng();

    // Mirror of the array the ops will be applied to, needed to know the size at each step.
    let mut model: Vec<i32> = Vec::new();

    (0..len)
        .map(|_| {
            let size = model.len();
            let val = rng.gen_range(VALUE_DOMAIN);
            let index = rng.gen_range(0..=size + 1);

            match rng.gen_range(0..100) {
                0..=34 => {
                    model.push(val);
                    ArrayOp::Add(val)
                }
                35..=49 => {
                    if index <= size {
                        model.insert(index, val);
                    }
                    ArrayOp::Insert(index, val)
                }
                50..=59 => {
                    if index < size {
                        model[index] = val;
                    }
                    ArrayOp::Set(index, val)
                }
                60..=74 => ArrayOp::Get(index),
                75..=89 => {
                    if index < size {
                        model.remove(index);
                    }
                    ArrayOp::RemoveAt(index)
                }
                90..=98 => {
                    if let Some(pos) = model.iter().position(|&e| e == val) {
                        model.remove(pos);
                    }
                    ArrayOp::RemoveValue(val)
                }
                _ => {
                    model.clear();
                    ArrayOp::Clear
                }
            }
        })
        .collect()
}

// --- Seeding ---

/// Makes every generator call draw a fresh seed. Benchmarks use this so repeated batches don't
/// measure the same input.
///
/// Panics if `OVERRIDE_SEED` is set, the two requests contradict each other.
pub fn use_random_seed_each_time() {
    if let Seeding::Override(seed) = seeding() {
        panic!("OVERRIDE_SEED={seed} is set, can't switch to a fresh seed per call");
    }

    *SEEDING.lock().unwrap_or_else(PoisonError::into_inner) = Some(Seeding::Fresh);
}

/// The seed the generators use in this process.
pub fn random_init_seed() -> u64 {
    match seeding() {
        Seeding::PerProcess(seed) | Seeding::Override(seed) => seed,
        Seeding::Fresh => thread_rng().gen(),
    }
}

#[derive(Copy, Clone, Debug)]
enum Seeding {
    PerProcess(u64),
    Override(u64),
    Fresh,
}

static SEEDING: Mutex<Option<Seeding>> = Mutex::new(None);

fn seeding() -> Seeding {
    *SEEDING
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(|| match env::var("OVERRIDE_SEED") {
            Ok(seed) => Seeding::Override(
                seed.parse()
                    .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {seed}")),
            ),
            Err(_) => Seeding::PerProcess(thread_rng().gen()),
        })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
