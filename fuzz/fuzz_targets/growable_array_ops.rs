#![no_main]

use libfuzzer_sys::fuzz_target;

use growable_sort::{Error, GrowableArray};
use growable_sort_fuzz::u8_as_array_ops;
use sort_test_tools::patterns::ArrayOp;

fuzz_target!(|data: &[u8]| {
    let Some((&initial_capacity, data)) = data.split_first() else {
        return;
    };

    let mut arr = match GrowableArray::with_capacity(initial_capacity as usize) {
        Ok(arr) => arr,
        Err(err) => {
            assert_eq!(initial_capacity, 0);
            assert_eq!(err, Error::InvalidArgument { capacity: 0 });
            return;
        }
    };
    let mut model: Vec<i32> = Vec::new();

    for op in u8_as_array_ops(data) {
        let size = model.len();
        let capacity_before = arr.capacity();

        match op {
            ArrayOp::Add(val) => {
                arr.add(val);
                model.push(val);
            }
            ArrayOp::Insert(index, val) => {
                let res = arr.insert(index, val);
                if index <= size {
                    assert_eq!(res, Ok(()));
                    model.insert(index, val);
                } else {
                    assert_eq!(res, Err(Error::IndexOutOfRange { index, size }));
                }
            }
            ArrayOp::Set(index, val) => {
                let res = arr.set(index, val);
                match model.get_mut(index) {
                    Some(elem) => assert_eq!(res, Ok(std::mem::replace(elem, val))),
                    None => assert_eq!(res, Err(Error::IndexOutOfRange { index, size })),
                }
            }
            ArrayOp::Get(index) => match model.get(index) {
                Some(elem) => assert_eq!(arr.get(index), Ok(elem)),
                None => assert_eq!(arr.get(index), Err(Error::IndexOutOfRange { index, size })),
            },
            ArrayOp::RemoveAt(index) => {
                let res = arr.remove_at(index);
                if index < size {
                    assert_eq!(res, Ok(model.remove(index)));
                } else {
                    assert_eq!(res, Err(Error::IndexOutOfRange { index, size }));
                }
            }
            ArrayOp::RemoveValue(val) => {
                let pos = model.iter().position(|elem| *elem == val);
                assert_eq!(arr.remove_value(&val), pos.is_some());
                if let Some(pos) = pos {
                    model.remove(pos);
                }
            }
            ArrayOp::Clear => {
                arr.clear();
                model.clear();
            }
        }

        assert!(arr.capacity() >= capacity_before);
        assert!(arr.len() <= arr.capacity());
        assert_eq!(arr.as_slice(), model.as_slice());
    }

    arr.sort();
    model.sort();
    assert_eq!(arr.as_slice(), model.as_slice());
});
