use etl::error::FunctionError;
use etl::function::{Callable, Delegate, InplaceFunction};
use etl::function::Signature;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

fn triple(x: u32) -> u32 {
    x * 3
}

fn halve(x: u32) -> u32 {
    x / 2
}

#[derive(Clone, PartialEq)]
struct Multiplier {
    factor: u32,
}

impl Callable<fn(u32) -> u32> for Multiplier {
    fn call(&self, (x,): (u32,)) -> u32 {
        x * self.factor
    }
}

struct Register {
    value: u32,
}

impl Register {
    fn masked(&self, mask: u32) -> u32 {
        self.value & mask
    }

    fn shifted(&self, by: u32) -> u32 {
        self.value >> by
    }
}

static REGISTER: Register = Register { value: 0xF0F0 };
static OTHER_REGISTER: Register = Register { value: 0xF0F0 };

type Unary = fn(u32) -> u32;

#[test]
fn test_every_binding_kind_calls_through() {
    let free: InplaceFunction<Unary> = InplaceFunction::from_fn(triple);
    let closure: InplaceFunction<Unary> = InplaceFunction::from_callable(|x: u32| x + 1);
    let functor: InplaceFunction<Unary> = InplaceFunction::from_comparable(Multiplier { factor: 5 });
    let method: InplaceFunction<Unary> = InplaceFunction::from_method(&REGISTER, Register::masked);

    assert_eq!(free.call((4,)), 12);
    assert_eq!(closure.call((4,)), 5);
    assert_eq!(functor.call((4,)), 20);
    assert_eq!(method.call((0xFF,)), 0xF0);
}

#[test]
fn test_inplace_equality_rules() {
    let empty: InplaceFunction<Unary> = InplaceFunction::new();
    assert_eq!(empty, InplaceFunction::default());

    let free: InplaceFunction<Unary> = InplaceFunction::from_fn(triple);
    assert_eq!(free, InplaceFunction::from(triple as Unary));
    assert_ne!(free, InplaceFunction::from_fn(halve as Unary));
    assert_ne!(free, empty);

    let five: InplaceFunction<Unary> = InplaceFunction::from_comparable(Multiplier { factor: 5 });
    assert_eq!(five, five.clone());
    assert_ne!(five, InplaceFunction::from_comparable(Multiplier { factor: 6 }));

    let method: InplaceFunction<Unary> = InplaceFunction::from_method(&REGISTER, Register::masked);
    assert_eq!(method, InplaceFunction::from_method(&REGISTER, Register::masked));
    assert_ne!(method, InplaceFunction::from_method(&OTHER_REGISTER, Register::masked));
    assert_ne!(method, InplaceFunction::from_method(&REGISTER, Register::shifted));

    let closure: InplaceFunction<Unary> = InplaceFunction::from_callable(|x: u32| x);
    assert_ne!(closure, closure.clone());
}

#[test]
fn test_rebinding_drops_previous_target() {
    let shared = Rc::new(1u32);
    let captured = Rc::clone(&shared);
    let mut f: InplaceFunction<Unary> = InplaceFunction::from_callable(move |x: u32| x + *captured);
    assert_eq!(Rc::strong_count(&shared), 2);

    f.set_fn(triple);
    assert_eq!(Rc::strong_count(&shared), 1);
    assert_eq!(f.call((2,)), 6);
}

#[test]
fn test_swap_exchanges_targets() {
    let mut a: InplaceFunction<Unary> = InplaceFunction::from_fn(triple);
    let mut b: InplaceFunction<Unary> = InplaceFunction::new();
    a.swap(&mut b);
    assert!(a.is_empty());
    assert_eq!(b.call((1,)), 3);
}

#[test]
fn test_unit_signature_call_if_reports_success() {
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let f: InplaceFunction<fn()> = InplaceFunction::from_callable(move || counter.set(counter.get() + 1));

    assert_eq!(f.call_if(()), Some(()));
    assert_eq!(hits.get(), 1);

    let empty: InplaceFunction<fn()> = InplaceFunction::new();
    assert_eq!(empty.call_if(()), None);
    assert_eq!(empty.try_call(()), Err(FunctionError::Uninitialized));
}

#[test]
fn test_multi_argument_signatures() {
    let f: InplaceFunction<fn(u8, u16, u32, u64) -> u64, 8> =
        InplaceFunction::from_callable(|a: u8, b: u16, c: u32, d: u64| {
            u64::from(a) + u64::from(b) + u64::from(c) + d
        });
    assert_eq!(f.call((1, 2, 3, 4)), 10);
    assert_eq!(InplaceFunction::<fn(u8, u16, u32, u64) -> u64, 8>::alignment(), 16);
}

#[test]
fn test_delegate_over_inplace_function() {
    let owned: InplaceFunction<Unary> = InplaceFunction::from_fn(triple);
    let borrowed: Delegate<'_, Unary> = Delegate::from_callable(&owned);
    assert_eq!(borrowed.call((7,)), 21);
    assert_eq!(borrowed, Delegate::from_callable(&owned));
}

#[test]
fn test_delegate_method_on_local_object() {
    let register = Register { value: 0b1100 };
    let d: Delegate<'_, Unary> = Delegate::from_method(&register, Register::shifted);
    assert_eq!(d.call((2,)), 0b11);
    assert_eq!(d.call_or((2,), |_| 0), 0b11);
}

#[test]
fn test_delegate_table_dispatch() {
    let handlers: [Delegate<'static, Unary>; 3] = [
        Delegate::from_fn(triple),
        Delegate::from_fn(halve),
        Delegate::new(),
    ];
    let results: Vec<u32> = handlers
        .iter()
        .map(|handler| handler.call_or_fn((10,), |x| x))
        .collect();
    assert_eq!(results, [30, 5, 10]);
}

#[test]
fn test_target_with_cell_capture_called_repeatedly() {
    let counter = Cell::new(0u32);
    let f: InplaceFunction<fn() -> u32> = InplaceFunction::from_callable(move || {
        counter.set(counter.get() + 1);
        counter.get()
    });
    assert_eq!(f.call(()), 1);
    assert_eq!(f.call(()), 2);
    assert_eq!(f.call_if(()), Some(3));
}

#[derive(Debug)]
struct Ticker {
    ticks: AtomicU32,
}

impl Clone for Ticker {
    fn clone(&self) -> Self {
        Ticker {
            ticks: AtomicU32::new(self.ticks.load(Ordering::Relaxed)),
        }
    }
}

impl Callable<fn(u32) -> u32> for Ticker {
    fn call(&self, (step,): (u32,)) -> u32 {
        self.ticks.fetch_add(step, Ordering::Relaxed) + step
    }
}

#[test]
fn test_functor_with_atomic_state() {
    let f: InplaceFunction<Unary> = InplaceFunction::from_callable(Ticker {
        ticks: AtomicU32::new(10),
    });
    assert_eq!(f.call((1,)), 11);
    assert_eq!(f.call((4,)), 15);

    let widened: InplaceFunction<Unary, 64> = f.widen();
    assert_eq!(widened.call((5,)), 20);
}

#[derive(Clone, Copy)]
#[repr(align(16))]
struct Block {
    words: [u32; 4],
}

impl Block {
    fn address(&self) -> usize {
        self as *const Block as usize
    }

    fn sum(&self) -> u32 {
        self.words.iter().sum()
    }
}

#[test]
fn test_capture_at_storage_alignment() {
    let block = Block { words: [1, 2, 3, 4] };
    let f: InplaceFunction<fn() -> (usize, u32)> =
        InplaceFunction::from_callable(move || (block.address(), block.sum()));
    assert_eq!(f.target_size(), 16);

    let (address, sum) = f.call(());
    assert_eq!(address % 16, 0);
    assert_eq!(sum, 10);

    let copy = f.clone();
    assert_eq!(copy.call(()).0 % 16, 0);
}

#[test]
fn test_method_pointer_and_named_method_bindings() {
    let pointer: <Unary as Signature>::Method<Register> = Register::masked;
    let by_pointer: InplaceFunction<Unary> = InplaceFunction::from_method(&REGISTER, pointer);
    assert_eq!(by_pointer.call((0x0F00,)), 0);
    assert_eq!(by_pointer, InplaceFunction::from_method(&REGISTER, pointer));

    let mut f: InplaceFunction<Unary> = InplaceFunction::new();
    f.set_method(&OTHER_REGISTER, Register::shifted);
    assert_eq!(f.call((4,)), 0x0F0F);
    assert_ne!(f, by_pointer);
}
