use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use qlayout_core::{Axis, Inset, Layout, LayoutDelegate, LayoutItem, Rect, Size, View};

use crate::{
    Animation, Ease, Helper, ListAlignment, ListConfig, ListError, ListLayout, Operation,
    OperationKind,
};

#[derive(Debug)]
struct FixedView {
    size: Size,
    measured: Rc<Cell<usize>>,
}

impl View for FixedView {
    fn size(&self, _available: Size) -> Size {
        self.measured.set(self.measured.get() + 1);
        self.size
    }
}

fn item(width: f32, height: f32) -> LayoutItem {
    counted(width, height).0
}

fn counted(width: f32, height: f32) -> (LayoutItem, Rc<Cell<usize>>) {
    let measured = Rc::new(Cell::new(0));
    let view = FixedView {
        size: Size::new(width, height),
        measured: measured.clone(),
    };
    (LayoutItem::new(view), measured)
}

fn items(count: usize, width: f32, height: f32) -> Vec<LayoutItem> {
    (0..count).map(|_| item(width, height)).collect()
}

fn horizontal(config: ListConfig) -> Helper {
    Helper::new(ListConfig {
        direction: Axis::Horizontal,
        ..config
    })
}

fn widths(items: &[LayoutItem]) -> Vec<f32> {
    items.iter().map(|item| item.frame().width()).collect()
}

fn xs(items: &[LayoutItem]) -> Vec<f32> {
    items.iter().map(|item| item.frame().x()).collect()
}

#[test]
fn test_max_size_clamps_uniform_share() {
    let helper = horizontal(ListConfig {
        max_size: Some(20.0),
        ..ListConfig::default()
    });
    let mut items = items(4, 50.0, 10.0);
    let mut cache = vec![None; 4];

    let used = helper.layout(Rect::from_xywh(0.0, 0.0, 1000.0, 100.0), &mut items, &mut cache, &[]);

    assert_eq!(widths(&items), [20.0; 4]);
    assert_eq!(xs(&items), [0.0, 20.0, 40.0, 60.0]);
    assert_eq!(used.width, 80.0);
}

#[test]
fn test_min_size_shrinks_to_share() {
    let helper = horizontal(ListConfig {
        min_size: Some(100.0),
        ..ListConfig::default()
    });
    let mut items = items(4, 300.0, 10.0);
    let mut cache = vec![None; 4];

    helper.layout(Rect::from_xywh(0.0, 0.0, 1000.0, 100.0), &mut items, &mut cache, &[]);

    assert_eq!(widths(&items), [250.0; 4]);
    assert_eq!(xs(&items), [0.0, 250.0, 500.0, 750.0]);
}

#[test]
fn test_max_spacing_grows_until_cap() {
    let helper = horizontal(ListConfig {
        spacing: 10.0,
        max_spacing: Some(50.0),
        ..ListConfig::default()
    });
    let items = items(3, 100.0, 10.0);
    let mut cache = vec![None; 3];

    let pass = helper.pass(
        Size::new(400.0, 10.0),
        helper.pass_size(Size::new(400.0, 10.0), &items, &mut cache, &[]),
    );
    assert_eq!(pass.spacing, 50.0);
    assert_eq!(pass.full.width, 400.0);

    let pass = helper.pass(
        Size::new(1000.0, 10.0),
        helper.pass_size(Size::new(1000.0, 10.0), &items, &mut cache, &[]),
    );
    assert_eq!(pass.spacing, 50.0);
    assert_eq!(pass.full.width, 400.0);
}

#[test]
fn test_min_spacing_shrinks_until_floor() {
    let helper = horizontal(ListConfig {
        spacing: 20.0,
        min_spacing: Some(5.0),
        ..ListConfig::default()
    });
    let items = items(3, 100.0, 10.0);
    let mut cache = vec![None; 3];

    let pass = helper.pass(
        Size::new(320.0, 10.0),
        helper.pass_size(Size::new(320.0, 10.0), &items, &mut cache, &[]),
    );
    assert_eq!(pass.spacing, 10.0);

    let pass = helper.pass(
        Size::new(200.0, 10.0),
        helper.pass_size(Size::new(200.0, 10.0), &items, &mut cache, &[]),
    );
    assert_eq!(pass.spacing, 5.0);
    assert_eq!(pass.full.width, 310.0);
}

#[test]
fn test_unbounded_main_axis_skips_redistribution() {
    let helper = horizontal(ListConfig {
        spacing: 4.0,
        max_size: Some(20.0),
        max_spacing: Some(100.0),
        ..ListConfig::default()
    });
    let items = items(2, 50.0, 10.0);
    let mut cache = vec![None; 2];

    let size = helper.size(Size::INFINITY, &items, &mut cache, &[]);
    assert_eq!(size, Size::new(104.0, 10.0));
}

#[test]
fn test_operations_scale_main_axis() {
    let helper = Helper::default();
    let items = items(2, 30.0, 40.0);
    let mut cache = vec![None; 2];

    let mut insert = Operation::insert([1]);
    let pass = helper.pass_size(Size::INFINITY, &items, &mut cache, &[insert.clone()]);
    assert_eq!(pass.sizes, [Size::new(30.0, 40.0), Size::new(30.0, 0.0)]);

    insert.set_progress(1.0);
    let pass = helper.pass_size(Size::INFINITY, &items, &mut cache, &[insert]);
    assert_eq!(pass.sizes, [Size::new(30.0, 40.0); 2]);
    assert_eq!(pass.full, Size::new(60.0, 80.0));
    assert_eq!(pass.max, Size::new(30.0, 40.0));
}

#[test]
fn test_alignment_and_inset_placement() {
    let helper = Helper::new(ListConfig {
        alignment: ListAlignment::Center,
        inset: Inset::new(5.0, 10.0, 10.0, 5.0),
        spacing: 4.0,
        ..ListConfig::default()
    });
    let mut items = vec![item(20.0, 10.0), item(60.0, 10.0)];
    let mut cache = vec![None; 2];

    let bounds = Rect::from_xywh(0.0, 0.0, 100.0, f32::INFINITY);
    let used = helper.layout(bounds, &mut items, &mut cache, &[]);

    assert_eq!(items[0].frame(), Rect::from_xywh(40.0, 5.0, 20.0, 10.0));
    assert_eq!(items[1].frame(), Rect::from_xywh(20.0, 19.0, 60.0, 10.0));
    assert_eq!(used, Size::new(80.0, 34.0));
}

#[test]
fn test_trailing_alignment_packs_against_cross_end() {
    let helper = Helper::new(ListConfig {
        alignment: ListAlignment::Trailing,
        ..ListConfig::default()
    });
    let mut items = vec![item(20.0, 10.0), item(60.0, 10.0)];
    let mut cache = vec![None; 2];

    let bounds = Rect::from_xywh(0.0, 0.0, 100.0, f32::INFINITY);
    let used = helper.layout(bounds, &mut items, &mut cache, &[]);

    assert_eq!(items[0].frame(), Rect::from_xywh(80.0, 0.0, 20.0, 10.0));
    assert_eq!(items[1].frame(), Rect::from_xywh(40.0, 10.0, 60.0, 10.0));
    assert_eq!(used, Size::new(60.0, 20.0));
}

#[test]
fn test_horizontal_placement_starts_after_inset() {
    let helper = horizontal(ListConfig {
        inset: Inset::new(5.0, 10.0, 20.0, 5.0),
        spacing: 4.0,
        ..ListConfig::default()
    });
    let mut items = vec![item(30.0, 10.0), item(40.0, 20.0)];
    let mut cache = vec![None; 2];

    let used = helper.layout(Rect::from_xywh(0.0, 0.0, 200.0, 50.0), &mut items, &mut cache, &[]);

    assert_eq!(items[0].frame(), Rect::from_xywh(10.0, 5.0, 30.0, 10.0));
    assert_eq!(items[1].frame(), Rect::from_xywh(44.0, 5.0, 40.0, 20.0));
    assert_eq!(used, Size::new(104.0, 30.0));
}

#[test]
fn test_fill_alignment_stretches_cross_axis() {
    let helper = Helper::new(ListConfig {
        alignment: ListAlignment::Fill,
        inset: Inset::symmetric(0.0, 8.0),
        ..ListConfig::default()
    });
    let mut items = vec![item(20.0, 10.0)];
    let mut cache = vec![None];

    let used = helper.layout(Rect::from_xywh(0.0, 0.0, 100.0, 50.0), &mut items, &mut cache, &[]);

    assert_eq!(items[0].frame(), Rect::from_xywh(8.0, 0.0, 84.0, 10.0));
    assert_eq!(used, Size::new(100.0, 10.0));
}

#[test]
fn test_collapsed_item_takes_no_spacing() {
    let helper = Helper::new(ListConfig {
        spacing: 10.0,
        ..ListConfig::default()
    });
    let mut items = vec![item(10.0, 10.0), item(10.0, 0.0), item(10.0, 10.0)];
    let mut cache = vec![None; 3];

    let bounds = Rect::from_xywh(0.0, 0.0, 10.0, f32::INFINITY);
    let used = helper.layout(bounds, &mut items, &mut cache, &[]);

    assert_eq!(used.height, 30.0);
    assert_eq!(items[1].frame(), Rect::from_xywh(0.0, 10.0, 0.0, 0.0));
    assert_eq!(items[2].frame().y(), 20.0);
}

#[test]
fn test_measurements_are_cached() {
    let (first, first_count) = counted(10.0, 10.0);
    let (second, second_count) = counted(10.0, 10.0);
    let second_id = second.id();
    let mut list = ListLayout::new().with_items([first, second]);

    list.size(Size::new(100.0, 100.0));
    list.size(Size::new(100.0, 100.0));
    list.layout(Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
    assert_eq!((first_count.get(), second_count.get()), (1, 1));

    assert!(list.invalidate_item(second_id));
    list.size(Size::new(100.0, 100.0));
    assert_eq!((first_count.get(), second_count.get()), (1, 2));

    list.set_config(ListConfig {
        spacing: 2.0,
        ..*list.config()
    });
    list.size(Size::new(100.0, 100.0));
    assert_eq!((first_count.get(), second_count.get()), (2, 3));
}

#[test]
fn test_idle_mutations_apply_immediately() {
    let mut list = ListLayout::new().with_items(items(3, 10.0, 10.0));
    let kept = list.item(2).map(LayoutItem::id).unwrap();

    list.insert(1, [item(10.0, 10.0)]).unwrap();
    assert_eq!(list.len(), 4);
    assert!(list.operations().is_empty());

    list.delete(0..2).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.index(kept), Some(1));

    assert_eq!(list.delete_items(&[kept, kept]), 1);
    assert_eq!(list.len(), 1);
    assert!(!list.contains(kept));
    assert_eq!(list.size(Size::new(10.0, f32::INFINITY)).height, 10.0);
}

#[test]
fn test_mutations_report_bad_indices() {
    let mut list = ListLayout::new().with_items(items(2, 10.0, 10.0));

    assert_eq!(
        list.insert(3, [item(1.0, 1.0)]),
        Err(ListError::IndexOutOfBounds { index: 3, len: 2 })
    );
    assert_eq!(
        list.delete(1..3),
        Err(ListError::RangeOutOfBounds { start: 1, end: 3, len: 2 })
    );
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 2..1;
    assert!(list.delete(reversed).is_err());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_animated_insert_grows_in() {
    let mut list = ListLayout::new().with_items(items(2, 100.0, 20.0));
    list.animate(
        Animation::new(Duration::from_millis(100))
            .ease(Ease::Linear)
            .preparing(|list| list.insert(1, [item(100.0, 20.0)]).unwrap()),
    );

    assert!(list.is_animating());
    assert_eq!(list.len(), 3);
    assert_eq!(list.operations()[0].kind(), OperationKind::Insert);
    let available = Size::new(100.0, f32::INFINITY);
    assert_eq!(list.size(available).height, 40.0);

    assert!(list.tick(Duration::from_millis(50)));
    assert_eq!(list.size(available).height, 50.0);

    assert!(!list.tick(Duration::from_millis(50)));
    assert!(list.operations().is_empty());
    assert_eq!(list.size(available).height, 60.0);
}

#[test]
fn test_animated_delete_is_deferred() {
    let mut list = ListLayout::new().with_items(items(3, 100.0, 20.0));
    let doomed = list.item(0).map(LayoutItem::id).unwrap();
    list.animate(
        Animation::new(Duration::from_millis(100))
            .ease(Ease::Linear)
            .preparing(|list| list.delete(0..1).unwrap()),
    );

    let available = Size::new(100.0, f32::INFINITY);
    assert_eq!(list.len(), 3);
    assert_eq!(list.size(available).height, 60.0);

    list.tick(Duration::from_millis(50));
    assert_eq!(list.size(available).height, 50.0);

    list.cancel();
    assert!(!list.is_animating());
    assert_eq!(list.len(), 2);
    assert!(!list.contains(doomed));
    assert_eq!(list.size(available).height, 40.0);
}

#[test]
fn test_insert_during_animation_shifts_pending_delete() {
    let mut list = ListLayout::new().with_items(items(3, 10.0, 10.0));
    let doomed = list.item(1).map(LayoutItem::id).unwrap();
    list.animate(Animation::new(Duration::from_millis(10)).preparing(|list| {
        list.delete(1..2).unwrap();
        list.insert(0, [item(10.0, 10.0)]).unwrap();
    }));

    assert_eq!(list.operations()[0].indices().iter().copied().collect::<Vec<_>>(), [2]);
    assert_eq!(list.operations()[1].indices().iter().copied().collect::<Vec<_>>(), [0]);

    list.complete();
    assert_eq!(list.len(), 3);
    assert!(!list.contains(doomed));
}

#[test]
fn test_animations_run_in_queue_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let step = |name: &'static str| {
        let log = log.clone();
        move |_: &mut ListLayout| log.borrow_mut().push(name)
    };

    let mut list = ListLayout::new();
    list.animate(
        Animation::new(Duration::from_millis(100))
            .preparing(step("prepare a"))
            .completion(step("complete a")),
    );
    list.animate(
        Animation::new(Duration::from_millis(100))
            .preparing(step("prepare b"))
            .completion(step("complete b")),
    );
    assert_eq!(*log.borrow(), ["prepare a"]);

    assert!(list.tick(Duration::from_millis(100)));
    assert_eq!(*log.borrow(), ["prepare a", "complete a", "prepare b"]);

    list.cancel();
    assert!(!list.is_animating());
    assert_eq!(
        *log.borrow(),
        ["prepare a", "complete a", "prepare b", "complete b"]
    );
}

#[test]
fn test_delay_holds_progress() {
    let mut list = ListLayout::new().with_items(items(1, 10.0, 10.0));
    list.animate(
        Animation::new(Duration::from_millis(100))
            .delay(Duration::from_millis(100))
            .preparing(|list| list.append([item(10.0, 10.0)])),
    );

    assert!(list.tick(Duration::from_millis(80)));
    assert_eq!(list.operations()[0].progress(), 0.0);
    assert!(!list.tick(Duration::from_millis(200)));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_tick_without_animation() {
    let mut list = ListLayout::new();
    assert!(!list.tick(Duration::from_millis(16)));
    list.process(0.5);
    list.complete();
    list.cancel();
    assert!(!list.is_animating());
}

#[test]
fn test_visible_items_slide_forward_and_back() {
    let mut list = ListLayout::new()
        .direction(Axis::Horizontal)
        .with_items(items(50, 20.0, 10.0));
    list.layout(Rect::from_xywh(0.0, 0.0, f32::INFINITY, 10.0));

    let first_index = |list: &ListLayout, offset: f32| {
        let bounds = Rect::from_xywh(offset, 0.0, 100.0, 10.0);
        let visible = list.items(bounds);
        assert!(visible.iter().all(|item| bounds.is_intersecting(&item.frame())));
        visible.first().and_then(|item| list.index(item.id()))
    };

    let mut previous = 0;
    for step in 0..130_u16 {
        let offset = f32::from(step) * 7.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let expected = (offset / 20.0) as usize;
        let first = first_index(&list, offset).unwrap();
        assert_eq!(first, expected, "offset {offset}");
        assert!(first >= previous);
        previous = first;
    }

    for step in (0..130_u16).rev() {
        let offset = f32::from(step) * 7.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let expected = (offset / 20.0) as usize;
        assert_eq!(first_index(&list, offset), Some(expected), "offset {offset}");
    }

    assert_eq!(first_index(&list, 5000.0), None);
    assert_eq!(list.items(Rect::from_xywh(30.0, 0.0, 40.0, 10.0)).len(), 3);
}

#[test]
fn test_visible_items_step_over_collapsed() {
    let mut list = ListLayout::new().with_items([
        item(10.0, 10.0),
        item(10.0, 0.0),
        item(10.0, 10.0),
    ]);
    list.layout(Rect::from_xywh(0.0, 0.0, 10.0, f32::INFINITY));

    let visible = list.items(Rect::from_xywh(0.0, 0.0, 10.0, 100.0));
    assert_eq!(visible.len(), 2);
}

#[derive(Default)]
struct Recorder {
    need_update: Cell<usize>,
    update_if_needed: Cell<usize>,
}

impl LayoutDelegate for Recorder {
    fn set_need_update(&self) {
        self.need_update.set(self.need_update.get() + 1);
    }

    fn update_if_needed(&self) {
        self.update_if_needed.set(self.update_if_needed.get() + 1);
    }
}

#[test]
fn test_delegate_is_notified() {
    let recorder = Rc::new(Recorder::default());
    let mut list = ListLayout::new();
    let delegate: Rc<dyn LayoutDelegate> = recorder.clone();
    list.set_delegate(Some(delegate));

    list.append([item(10.0, 10.0)]);
    assert_eq!(recorder.need_update.get(), 1);

    list.animate(Animation::new(Duration::from_millis(10)));
    list.tick(Duration::from_millis(5));
    assert!(recorder.update_if_needed.get() >= 1);

    let before = recorder.need_update.get();
    list.invalidate();
    assert_eq!(recorder.need_update.get(), before + 1);
}
