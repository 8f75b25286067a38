//! The stateful list layout.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::ops::Range;
use std::rc::Rc;
use std::time::Duration;

use qlayout_core::{Axis, Inset, ItemId, Layout, LayoutDelegate, LayoutItem, Rect, Size};

use crate::{
    animation::{Animation, Task},
    error::ListError,
    helper::{Helper, ListAlignment, ListConfig},
    operation::{Operation, OperationKind},
};

/// A list of [`LayoutItem`]s laid out one after another.
///
/// Measurements are cached per item. Structural changes made while an
/// [`Animation`] runs are recorded as [`Operation`]s so inserted items grow
/// in and deleted items shrink out; deleted items are removed once the
/// animation completes. Animations run one at a time in the order they were
/// queued and are driven by the host through [`tick`](Self::tick) or
/// [`process`](Self::process) and [`complete`](Self::complete).
pub struct ListLayout {
    helper: Helper,
    items: Vec<LayoutItem>,
    cache: RefCell<Vec<Option<Size>>>,
    operations: Vec<Operation>,
    queue: VecDeque<Animation>,
    task: Option<Task>,
    first_visible: Cell<Option<usize>>,
    delegate: Option<Rc<dyn LayoutDelegate>>,
}

impl fmt::Debug for ListLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListLayout")
            .field("config", self.helper.config())
            .field("items", &self.items.len())
            .field("operations", &self.operations)
            .field("queued", &self.queue.len())
            .field("task", &self.task)
            .field("first_visible", &self.first_visible.get())
            .finish_non_exhaustive()
    }
}

impl Default for ListLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ListLayout {
    /// An empty vertical list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// An empty list using `config`.
    #[must_use]
    pub fn with_config(config: ListConfig) -> Self {
        Self {
            helper: Helper::new(config),
            items: Vec::new(),
            cache: RefCell::new(Vec::new()),
            operations: Vec::new(),
            queue: VecDeque::new(),
            task: None,
            first_visible: Cell::new(None),
            delegate: None,
        }
    }

    /// Builder variant of [`append`](Self::append).
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = LayoutItem>) -> Self {
        self.append(items);
        self
    }

    /// Sets the axis along which items follow each other.
    #[must_use]
    pub fn direction(self, direction: Axis) -> Self {
        self.configure(|config| config.direction = direction)
    }

    /// Sets the cross-axis placement.
    #[must_use]
    pub fn alignment(self, alignment: ListAlignment) -> Self {
        self.configure(|config| config.alignment = alignment)
    }

    /// Sets the space around the content.
    #[must_use]
    pub fn inset(self, inset: impl Into<Inset>) -> Self {
        let inset = inset.into();
        self.configure(|config| config.inset = inset)
    }

    /// Sets the base gap between items.
    #[must_use]
    pub fn spacing(self, spacing: f32) -> Self {
        self.configure(|config| config.spacing = spacing)
    }

    /// Lets spacing shrink down to `spacing` when content overflows.
    #[must_use]
    pub fn min_spacing(self, spacing: f32) -> Self {
        self.configure(|config| config.min_spacing = Some(spacing))
    }

    /// Lets spacing grow up to `spacing` when content underfills.
    #[must_use]
    pub fn max_spacing(self, spacing: f32) -> Self {
        self.configure(|config| config.max_spacing = Some(spacing))
    }

    /// Gives every item at least `size` of the uniform share.
    #[must_use]
    pub fn min_size(self, size: f32) -> Self {
        self.configure(|config| config.min_size = Some(size))
    }

    /// Gives every item at most `size` of the uniform share.
    #[must_use]
    pub fn max_size(self, size: f32) -> Self {
        self.configure(|config| config.max_size = Some(size))
    }

    fn configure(mut self, change: impl FnOnce(&mut ListConfig)) -> Self {
        let mut config = *self.helper.config();
        change(&mut config);
        self.set_config(config);
        self
    }

    /// The solver parameters.
    #[must_use]
    pub const fn config(&self) -> &ListConfig {
        self.helper.config()
    }

    /// Replaces the solver parameters, dropping every cached measurement.
    pub fn set_config(&mut self, config: ListConfig) {
        if *self.helper.config() == config {
            return;
        }
        self.helper = Helper::new(config);
        self.invalidate();
    }

    /// Number of items, including items still animating out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an animation is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.task.is_some()
    }

    /// The item at `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&LayoutItem> {
        self.items.get(index)
    }

    /// Every item in list order.
    #[must_use]
    pub fn items_all(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Operations of the running animation.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Whether the list holds the item `id`.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index(id).is_some()
    }

    /// Position of the item `id`.
    #[must_use]
    pub fn index(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Inserts `items` before `index`.
    ///
    /// While an animation runs the new items grow in from an empty extent.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if `index > len`.
    pub fn insert(
        &mut self,
        index: usize,
        items: impl IntoIterator<Item = LayoutItem>,
    ) -> Result<(), ListError> {
        let len = self.items.len();
        if index > len {
            return Err(ListError::IndexOutOfBounds { index, len });
        }

        let tail = self.items.split_off(index);
        self.items.extend(items);
        let count = self.items.len() - index;
        self.items.extend(tail);
        if count == 0 {
            return Ok(());
        }

        let cache = self.cache.get_mut();
        let cached_tail = cache.split_off(index);
        cache.extend(std::iter::repeat_n(None, count));
        cache.extend(cached_tail);

        let animating = self.is_animating();
        if animating {
            for operation in &mut self.operations {
                operation.shift(index, count);
            }
            self.operations
                .push(Operation::insert(index..index + count));
        }
        tracing::debug!(index, count, animating, "insert list items");

        self.structure_changed();
        Ok(())
    }

    /// Appends `items` to the end of the list.
    pub fn append(&mut self, items: impl IntoIterator<Item = LayoutItem>) {
        let len = self.items.len();
        // Inserting at the end cannot be out of bounds.
        let _ = self.insert(len, items);
    }

    /// Deletes the items in `range`.
    ///
    /// While an animation runs the items shrink out and are removed when it
    /// completes.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::RangeOutOfBounds`] if the range is reversed or
    /// reaches past the end.
    pub fn delete(&mut self, range: Range<usize>) -> Result<(), ListError> {
        let len = self.items.len();
        if range.start > range.end || range.end > len {
            return Err(ListError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        if range.is_empty() {
            return Ok(());
        }
        self.delete_indices(range.collect());
        Ok(())
    }

    /// Deletes the items with the given identities. Unknown identities are
    /// ignored. Returns the number of items scheduled for deletion.
    pub fn delete_items(&mut self, ids: &[ItemId]) -> usize {
        let indices: BTreeSet<usize> = ids.iter().filter_map(|id| self.index(*id)).collect();
        let count = indices.len();
        if count > 0 {
            self.delete_indices(indices);
        }
        count
    }

    fn delete_indices(&mut self, indices: BTreeSet<usize>) {
        let animating = self.is_animating();
        tracing::debug!(count = indices.len(), animating, "delete list items");
        if animating {
            self.operations.push(Operation::delete(indices));
            self.notify_need_update();
        } else {
            self.remove_indices(&indices);
            self.structure_changed();
        }
    }

    fn remove_indices(&mut self, indices: &BTreeSet<usize>) {
        let cache = self.cache.get_mut();
        for &index in indices.iter().rev() {
            self.items.remove(index);
            cache.remove(index);
        }
    }

    /// Queues `animation`. It starts immediately when nothing else runs.
    pub fn animate(&mut self, animation: Animation) {
        tracing::debug!(
            duration = ?animation.duration(),
            queued = self.queue.len(),
            "queue list animation"
        );
        self.queue.push_back(animation);
        self.start_next();
    }

    fn start_next(&mut self) {
        if self.task.is_some() {
            return;
        }
        let Some(animation) = self.queue.pop_front() else {
            return;
        };
        let Animation {
            duration,
            ease,
            delay,
            preparing,
            completion,
        } = animation;

        tracing::debug!(?duration, ?delay, "start list animation");
        self.task = Some(Task {
            duration,
            ease,
            delay,
            elapsed: Duration::ZERO,
            completion,
        });
        if let Some(preparing) = preparing {
            preparing(self);
        }
        self.notify_need_update();
    }

    /// Moves every operation of the running animation to `progress`.
    pub fn process(&mut self, progress: f32) {
        if self.task.is_none() {
            return;
        }
        tracing::trace!(progress, operations = self.operations.len(), "process list animation");
        for operation in &mut self.operations {
            operation.set_progress(progress);
        }
        self.notify_need_update();
        self.notify_update_if_needed();
    }

    /// Finishes the running animation: pending deletions are applied,
    /// operations are cleared, the completion hook runs and the next queued
    /// animation starts.
    pub fn complete(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        let deleted: BTreeSet<usize> = self
            .operations
            .drain(..)
            .filter(|operation| operation.kind() == OperationKind::Delete)
            .flat_map(|operation| operation.indices().clone())
            .collect();
        self.remove_indices(&deleted);
        tracing::debug!(
            removed = deleted.len(),
            queued = self.queue.len(),
            "complete list animation"
        );
        self.structure_changed();

        if let Some(completion) = task.completion {
            completion(self);
        }
        self.notify_update_if_needed();
        self.start_next();
    }

    /// Advances the running animation by `delta`. Returns whether an
    /// animation is still running afterwards.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(task) = self.task.as_mut() else {
            return false;
        };
        task.elapsed += delta;
        let Some(linear) = task.linear_progress() else {
            return true;
        };
        let eased = task.ease.apply(linear);

        self.process(eased);
        if linear >= 1.0 {
            self.complete();
        }
        self.is_animating()
    }

    /// Jumps the running animation to its end and completes it. Queued
    /// animations are kept and the next one starts.
    pub fn cancel(&mut self) {
        if self.task.is_none() {
            return;
        }
        tracing::debug!(queued = self.queue.len(), "cancel list animation");
        self.process(1.0);
        self.complete();
    }

    fn structure_changed(&mut self) {
        self.first_visible.set(None);
        self.check_cache();
        self.notify_need_update();
    }

    fn check_cache(&self) {
        debug_assert_eq!(
            self.cache.borrow().len(),
            self.items.len(),
            "size cache out of sync with items"
        );
    }

    fn notify_need_update(&self) {
        if let Some(delegate) = &self.delegate {
            delegate.set_need_update();
        }
    }

    fn notify_update_if_needed(&self) {
        if let Some(delegate) = &self.delegate {
            delegate.update_if_needed();
        }
    }

    fn main_axis(&self) -> Axis {
        self.helper.config().direction
    }

    fn is_collapsed(&self, index: usize) -> bool {
        self.items[index].frame().size().main(self.main_axis()) <= 0.0
    }

    /// Index of the first item intersecting `bounds`, searched from the
    /// previous answer when there is one.
    fn visible_index(&self, bounds: Rect) -> Option<usize> {
        let axis = self.main_axis();
        let hint = self
            .first_visible
            .get()
            .filter(|&index| index < self.items.len());

        let found = match hint {
            Some(hint) if self.items[hint].frame().main_min(axis) > bounds.main_min(axis) => {
                self.scan_backward(hint, bounds)
                    .or_else(|| self.scan_forward(hint, bounds))
            }
            Some(hint) => self.scan_forward(hint, bounds),
            None => self.scan_forward(0, bounds),
        };
        if found.is_some() {
            self.first_visible.set(found);
        }
        found
    }

    fn scan_forward(&self, from: usize, bounds: Rect) -> Option<usize> {
        let axis = self.main_axis();
        for index in from..self.items.len() {
            if self.is_collapsed(index) {
                continue;
            }
            let frame = self.items[index].frame();
            if bounds.is_intersecting(&frame) {
                return Some(index);
            }
            if frame.main_min(axis) >= bounds.main_max(axis) {
                return None;
            }
        }
        None
    }

    fn scan_backward(&self, from: usize, bounds: Rect) -> Option<usize> {
        let axis = self.main_axis();
        let mut first = None;
        for index in (0..=from).rev() {
            if self.is_collapsed(index) {
                continue;
            }
            let frame = self.items[index].frame();
            if bounds.is_intersecting(&frame) {
                first = Some(index);
            } else if frame.main_max(axis) <= bounds.main_min(axis) {
                break;
            }
        }
        first
    }
}

impl Layout for ListLayout {
    fn size(&self, available: Size) -> Size {
        self.check_cache();
        let mut cache = self.cache.borrow_mut();
        self.helper
            .size(available, &self.items, &mut cache, &self.operations)
    }

    fn layout(&mut self, bounds: Rect) -> Size {
        self.check_cache();
        self.helper.layout(
            bounds,
            &mut self.items,
            self.cache.get_mut(),
            &self.operations,
        )
    }

    fn items(&self, bounds: Rect) -> Vec<&LayoutItem> {
        let Some(first) = self.visible_index(bounds) else {
            return Vec::new();
        };
        let mut visible = Vec::new();
        for index in first..self.items.len() {
            if self.is_collapsed(index) {
                continue;
            }
            let item = &self.items[index];
            if !bounds.is_intersecting(&item.frame()) {
                break;
            }
            visible.push(item);
        }
        visible
    }

    fn invalidate(&mut self) {
        tracing::trace!(items = self.items.len(), "invalidate list cache");
        self.cache.get_mut().fill(None);
        self.notify_need_update();
    }

    fn invalidate_item(&mut self, item: ItemId) -> bool {
        let Some(index) = self.index(item) else {
            return false;
        };
        tracing::trace!(index, "invalidate list item");
        self.cache.get_mut()[index] = None;
        self.items[index].set_need_force_update();
        self.notify_need_update();
        true
    }

    fn set_delegate(&mut self, delegate: Option<Rc<dyn LayoutDelegate>>) {
        self.delegate = delegate;
    }
}
