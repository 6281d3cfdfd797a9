use sort_test_tools::patterns::ArrayOp;

/// Longest input the sort targets accept. Sorted inputs are quadratic and the recursive sort
/// nests once per element for them.
pub const MAX_SORT_LEN: usize = 1_024;

pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .take(MAX_SORT_LEN)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Decodes three bytes per op: the op kind, an index and a value.
///
/// Indices stay small so that both valid and out of range accesses show up.
pub fn u8_as_array_ops(data: &[u8]) -> Vec<ArrayOp> {
    data.chunks_exact(3)
        .map(|chunk| {
            let index = chunk[1] as usize;
            let val = chunk[2] as i32;

            match chunk[0] % 7 {
                0 => ArrayOp::Add(val),
                1 => ArrayOp::Insert(index, val),
                2 => ArrayOp::Set(index, val),
                3 => ArrayOp::Get(index),
                4 => ArrayOp::RemoveAt(index),
                5 => ArrayOp::RemoveValue(val),
                _ => ArrayOp::Clear,
            }
        })
        .collect()
}
