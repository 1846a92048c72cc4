/*!
In-memory shell, scheduler and test harness.

`FakeShell` keeps workspaces, windows and apps in shared state and fires
the same notifications a real shell would. Window commands act on that
state, so closing a window through a menu removes it from its workspace.
*/

#![allow(clippy::unwrap_used, clippy::panic)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::core::WindowList;
use crate::platform::{
  AppHandle, Callback, Scheduler, SettingsStore, Shell, Subscription, WindowCallback,
  WindowHandle, WorkspaceHandle,
};
use crate::settings::{Config, MemorySettings};
use crate::types::{
  AppId, ButtonId, Event, SettingKey, TimerId, WindowId, WindowInfo, WindowListError,
  WindowListResult, WindowProperty,
};
use crate::WindowListBuilder;
use serde_json::Value;

/// Listener storage shared by every fake: `(id, callback)` pairs.
struct Listeners<F: ?Sized> {
  next: Cell<u64>,
  entries: RefCell<Vec<(u64, Rc<F>)>>,
}

impl<F: ?Sized> Default for Listeners<F> {
  fn default() -> Self {
    Self {
      next: Cell::new(0),
      entries: RefCell::new(Vec::new()),
    }
  }
}

impl<F: ?Sized> Listeners<F> {
  fn add(&self, callback: Rc<F>) -> u64 {
    let id = self.next.get() + 1;
    self.next.set(id);
    self.entries.borrow_mut().push((id, callback));
    id
  }

  fn remove(&self, id: u64) {
    self.entries.borrow_mut().retain(|(entry, _)| *entry != id);
  }

  /// Snapshot, so callbacks run without a borrow held.
  fn snapshot(&self) -> Vec<Rc<F>> {
    self.entries.borrow().iter().map(|(_, cb)| Rc::clone(cb)).collect()
  }

  fn len(&self) -> usize {
    self.entries.borrow().len()
  }
}

/// Subscription that runs `release` on `owner`, if it is still alive.
fn subscription<T: 'static>(owner: &Rc<T>, release: impl Fn(&T) + 'static) -> Subscription {
  let weak = Rc::downgrade(owner);
  Subscription::new(move || {
    if let Some(owner) = weak.upgrade() {
      release(owner.as_ref());
    }
  })
}

// ============================================================================
// Scheduler
// ============================================================================

#[derive(Default)]
struct SchedulerState {
  next: Cell<u64>,
  pending: RefCell<Vec<(TimerId, Duration, Box<dyn FnOnce()>)>>,
  fired: Cell<usize>,
  cancelled: Cell<usize>,
}

/// Manually driven scheduler. Nothing fires until `run_all`.
#[derive(Clone, Default)]
pub(crate) struct FakeScheduler {
  state: Rc<SchedulerState>,
}

impl FakeScheduler {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn pending_count(&self) -> usize {
    self.state.pending.borrow().len()
  }

  /// Delays of the pending timers, oldest first.
  pub(crate) fn pending_delays(&self) -> Vec<Duration> {
    self.state.pending.borrow().iter().map(|(_, d, _)| *d).collect()
  }

  /// Fire every pending delay, including ones scheduled while firing.
  pub(crate) fn run_all(&self) {
    loop {
      let batch: Vec<_> = self.state.pending.borrow_mut().drain(..).collect();
      if batch.is_empty() {
        return;
      }
      for (_, _, callback) in batch {
        self.state.fired.set(self.state.fired.get() + 1);
        callback();
      }
    }
  }

  pub(crate) fn fired_count(&self) -> usize {
    self.state.fired.get()
  }

  pub(crate) fn cancelled_count(&self) -> usize {
    self.state.cancelled.get()
  }
}

impl Scheduler for FakeScheduler {
  fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
    let id = TimerId(self.state.next.get() + 1);
    self.state.next.set(id.0);
    self.state.pending.borrow_mut().push((id, delay, callback));
    id
  }

  fn cancel(&self, id: TimerId) {
    let mut pending = self.state.pending.borrow_mut();
    let before = pending.len();
    pending.retain(|(timer, _, _)| *timer != id);
    if pending.len() != before {
      self.state.cancelled.set(self.state.cancelled.get() + 1);
    }
  }
}

// ============================================================================
// Windows
// ============================================================================

struct WindowState {
  id: WindowId,
  /// None once destroyed.
  info: RefCell<Option<WindowInfo>>,
  transients: RefCell<Vec<FakeWindow>>,
  listeners: Listeners<dyn Fn()>,
  /// Property of each listener, by listener id.
  properties: RefCell<HashMap<u64, WindowProperty>>,
  commands: RefCell<Vec<&'static str>>,
  shell: RefCell<Weak<ShellState>>,
}

/// Window handle backed by shared in-memory state.
#[derive(Clone)]
pub(crate) struct FakeWindow {
  state: Rc<WindowState>,
}

impl std::fmt::Debug for FakeWindow {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "FakeWindow({})", self.state.id)
  }
}

impl PartialEq for FakeWindow {
  fn eq(&self, other: &Self) -> bool {
    self.state.id == other.state.id
  }
}

impl Eq for FakeWindow {}

impl Hash for FakeWindow {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.state.id.hash(state);
  }
}

fn watched_value(info: Option<&WindowInfo>, property: WindowProperty) -> Option<String> {
  let info = info?;
  Some(match property {
    WindowProperty::Title => info.title.clone().unwrap_or_default(),
    WindowProperty::Minimized => info.minimized.to_string(),
    WindowProperty::Urgent => info.urgent.to_string(),
    WindowProperty::DemandsAttention => info.demands_attention.to_string(),
  })
}

impl FakeWindow {
  /// Standalone window, not listed on any workspace.
  pub(crate) fn new(id: WindowId, info: WindowInfo) -> Self {
    Self {
      state: Rc::new(WindowState {
        id,
        info: RefCell::new(Some(info)),
        transients: RefCell::new(Vec::new()),
        listeners: Listeners::default(),
        properties: RefCell::new(HashMap::new()),
        commands: RefCell::new(Vec::new()),
        shell: RefCell::new(Weak::new()),
      }),
    }
  }

  pub(crate) fn add_transient(&self, child: &Self) {
    self.state.transients.borrow_mut().push(child.clone());
  }

  /// Modify the window and notify listeners of every watched property that changed.
  pub(crate) fn update(&self, change: impl FnOnce(&mut WindowInfo)) {
    let before: Vec<_> = WindowProperty::WATCHED
      .iter()
      .map(|&p| watched_value(self.state.info.borrow().as_ref(), p))
      .collect();
    if let Some(info) = self.state.info.borrow_mut().as_mut() {
      change(info);
    }
    let changed: Vec<WindowProperty> = WindowProperty::WATCHED
      .iter()
      .zip(before)
      .filter(|(property, old)| watched_value(self.state.info.borrow().as_ref(), **property) != *old)
      .map(|(&property, _)| property)
      .collect();
    for property in changed {
      self.notify(property);
    }
  }

  fn notify(&self, property: WindowProperty) {
    let ids: Vec<u64> = self
      .state
      .properties
      .borrow()
      .iter()
      .filter(|&(_, &p)| p == property)
      .map(|(&id, _)| id)
      .collect();
    let callbacks: Vec<Rc<dyn Fn()>> = self
      .state
      .listeners
      .entries
      .borrow()
      .iter()
      .filter(|(id, _)| ids.contains(id))
      .map(|(_, cb)| Rc::clone(cb))
      .collect();
    for callback in callbacks {
      callback();
    }
  }

  /// The underlying window is gone: `info` returns None, commands fail.
  pub(crate) fn destroy(&self) {
    self.state.info.borrow_mut().take();
  }

  /// Live property subscriptions.
  pub(crate) fn listener_count(&self) -> usize {
    self.state.listeners.len()
  }

  /// Commands received, oldest first.
  pub(crate) fn commands(&self) -> Vec<&'static str> {
    self.state.commands.borrow().clone()
  }

  fn command(&self, name: &'static str, apply: impl FnOnce(&Self)) -> WindowListResult<()> {
    if self.state.info.borrow().is_none() {
      return Err(WindowListError::StaleHandle(self.state.id));
    }
    self.state.commands.borrow_mut().push(name);
    apply(self);
    Ok(())
  }

  fn shell(&self) -> Option<Rc<ShellState>> {
    self.state.shell.borrow().upgrade()
  }
}

impl WindowHandle for FakeWindow {
  fn id(&self) -> WindowId {
    self.state.id
  }

  fn info(&self) -> Option<WindowInfo> {
    self.state.info.borrow().clone()
  }

  fn for_each_transient(&self, visit: &mut dyn FnMut(&Self) -> bool) {
    let transients = self.state.transients.borrow().clone();
    for transient in &transients {
      if !visit(transient) {
        return;
      }
    }
  }

  fn on_property_changed(&self, property: WindowProperty, callback: Callback) -> Subscription {
    let id = self.state.listeners.add(Rc::from(callback));
    self.state.properties.borrow_mut().insert(id, property);
    let weak = Rc::downgrade(&self.state);
    Subscription::new(move || {
      if let Some(state) = weak.upgrade() {
        state.listeners.remove(id);
        state.properties.borrow_mut().remove(&id);
      }
    })
  }

  fn minimize(&self) -> WindowListResult<()> {
    self.command("minimize", |w| {
      w.update(|info| {
        info.minimized = true;
        info.focused = false;
      });
    })
  }

  fn unminimize(&self) -> WindowListResult<()> {
    self.command("unminimize", |w| w.update(|info| info.minimized = false))
  }

  fn maximize(&self) -> WindowListResult<()> {
    self.command("maximize", |w| w.update(|info| info.maximized = true))
  }

  fn unmaximize(&self) -> WindowListResult<()> {
    self.command("unmaximize", |w| w.update(|info| info.maximized = false))
  }

  fn activate(&self) -> WindowListResult<()> {
    self.command("activate", |w| match w.shell() {
      Some(shell) => shell.focus_window(w),
      None => w.update(|info| {
        info.minimized = false;
        info.focused = true;
      }),
    })
  }

  fn close(&self) -> WindowListResult<()> {
    self.command("close", |w| match w.shell() {
      Some(shell) => shell.remove_window(w),
      None => w.destroy(),
    })
  }

  fn move_to_workspace(&self, index: u32) -> WindowListResult<()> {
    self.command("move_to_workspace", |w| match w.shell() {
      Some(shell) => shell.move_window(w, index),
      None => w.update(|info| info.workspace = Some(index)),
    })
  }

  fn stick(&self) -> WindowListResult<()> {
    self.command("stick", |w| w.update(|info| info.on_all_workspaces = true))
  }

  fn unstick(&self) -> WindowListResult<()> {
    self.command("unstick", |w| w.update(|info| info.on_all_workspaces = false))
  }
}

// ============================================================================
// Apps
// ============================================================================

struct AppState {
  id: AppId,
  name: String,
  launches: Cell<usize>,
}

#[derive(Clone)]
pub(crate) struct FakeApp {
  state: Rc<AppState>,
}

impl std::fmt::Debug for FakeApp {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "FakeApp({})", self.state.id)
  }
}

impl FakeApp {
  pub(crate) fn launch_count(&self) -> usize {
    self.state.launches.get()
  }
}

impl AppHandle for FakeApp {
  fn id(&self) -> AppId {
    self.state.id.clone()
  }

  fn name(&self) -> Option<String> {
    Some(self.state.name.clone())
  }

  fn icon_name(&self) -> Option<String> {
    Some(format!("{}-icon", self.state.id))
  }

  fn open_new_window(&self) -> WindowListResult<()> {
    self.state.launches.set(self.state.launches.get() + 1);
    Ok(())
  }
}

// ============================================================================
// Workspaces
// ============================================================================

struct WorkspaceState {
  index: u32,
  windows: RefCell<Vec<FakeWindow>>,
  added: Listeners<dyn Fn(&FakeWindow)>,
  removed: Listeners<dyn Fn(&FakeWindow)>,
}

#[derive(Clone)]
pub(crate) struct FakeWorkspace {
  state: Rc<WorkspaceState>,
}

impl FakeWorkspace {
  fn new(index: u32) -> Self {
    Self {
      state: Rc::new(WorkspaceState {
        index,
        windows: RefCell::new(Vec::new()),
        added: Listeners::default(),
        removed: Listeners::default(),
      }),
    }
  }

  fn insert(&self, window: &FakeWindow) {
    self.state.windows.borrow_mut().push(window.clone());
    for callback in self.state.added.snapshot() {
      callback(window);
    }
  }

  fn remove(&self, window: &FakeWindow) -> bool {
    let removed = {
      let mut windows = self.state.windows.borrow_mut();
      let before = windows.len();
      windows.retain(|w| w != window);
      windows.len() != before
    };
    if removed {
      for callback in self.state.removed.snapshot() {
        callback(window);
      }
    }
    removed
  }

  fn listener_count(&self) -> usize {
    self.state.added.len() + self.state.removed.len()
  }
}

impl WorkspaceHandle for FakeWorkspace {
  type Window = FakeWindow;

  fn index(&self) -> u32 {
    self.state.index
  }

  fn list_windows(&self) -> Vec<FakeWindow> {
    self.state.windows.borrow().clone()
  }

  fn on_window_added(&self, callback: WindowCallback<FakeWindow>) -> Subscription {
    let id = self.state.added.add(Rc::from(callback));
    subscription(&self.state, move |s| s.added.remove(id))
  }

  fn on_window_removed(&self, callback: WindowCallback<FakeWindow>) -> Subscription {
    let id = self.state.removed.add(Rc::from(callback));
    subscription(&self.state, move |s| s.removed.remove(id))
  }
}

// ============================================================================
// Shell
// ============================================================================

#[derive(Default)]
struct ShellState {
  workspaces: RefCell<Vec<FakeWorkspace>>,
  active: Cell<u32>,
  apps: RefCell<Vec<FakeApp>>,
  window_apps: RefCell<HashMap<WindowId, AppId>>,
  pids: RefCell<HashMap<u32, AppId>>,
  uninteresting: RefCell<HashSet<WindowId>>,
  windows: RefCell<Vec<FakeWindow>>,
  next_window: Cell<u64>,
  clock: Cell<u64>,
  switched: Listeners<dyn Fn()>,
  changed: Listeners<dyn Fn()>,
  focus: Listeners<dyn Fn()>,
}

fn fire(listeners: &Listeners<dyn Fn()>) {
  for callback in listeners.snapshot() {
    callback();
  }
}

impl ShellState {
  fn workspace(&self, index: u32) -> Option<FakeWorkspace> {
    self
      .workspaces
      .borrow()
      .iter()
      .find(|ws| ws.index() == index)
      .cloned()
  }

  fn app(&self, id: &AppId) -> Option<FakeApp> {
    self.apps.borrow().iter().find(|a| &a.state.id == id).cloned()
  }

  fn tick(&self) -> u64 {
    let now = self.clock.get() + 1;
    self.clock.set(now);
    now
  }

  fn remove_window(&self, window: &FakeWindow) {
    let workspaces = self.workspaces.borrow().clone();
    for workspace in &workspaces {
      workspace.remove(window);
    }
    self.windows.borrow_mut().retain(|w| w != window);
    window.destroy();
  }

  fn move_window(&self, window: &FakeWindow, index: u32) {
    let Some(target) = self.workspace(index) else {
      return;
    };
    let workspaces = self.workspaces.borrow().clone();
    for workspace in &workspaces {
      workspace.remove(window);
    }
    window.update(|info| info.workspace = Some(index));
    target.insert(window);
  }

  fn focus_window(&self, window: &FakeWindow) {
    let now = self.tick();
    let windows = self.windows.borrow().clone();
    for other in windows.iter().filter(|w| *w != window) {
      other.update(|info| info.focused = false);
    }
    window.update(|info| {
      info.minimized = false;
      info.focused = true;
      info.user_time = now;
    });
    fire(&self.focus);
  }
}

/// In-memory shell. Clone is cheap and shares the same state.
#[derive(Clone)]
pub(crate) struct FakeShell {
  state: Rc<ShellState>,
}

impl FakeShell {
  /// Shell with `workspaces` empty workspaces, the first one active.
  pub(crate) fn new(workspaces: u32) -> Self {
    let state = ShellState::default();
    *state.workspaces.borrow_mut() = (0..workspaces).map(FakeWorkspace::new).collect();
    Self {
      state: Rc::new(state),
    }
  }

  pub(crate) fn add_app(&self, id: &str, name: &str) -> FakeApp {
    let app = FakeApp {
      state: Rc::new(AppState {
        id: AppId::from(id),
        name: name.to_owned(),
        launches: Cell::new(0),
      }),
    };
    self.state.apps.borrow_mut().push(app.clone());
    app
  }

  pub(crate) fn open_window(&self, app: &FakeApp, workspace: u32, title: &str) -> FakeWindow {
    self.open_window_with(app, workspace, title, |_| {})
  }

  /// Open a window, adjusting its attributes before the shell announces it.
  pub(crate) fn open_window_with(
    &self,
    app: &FakeApp,
    workspace: u32,
    title: &str,
    adjust: impl FnOnce(&mut WindowInfo),
  ) -> FakeWindow {
    let window = self.create_window(workspace, title, None, adjust);
    self
      .state
      .window_apps
      .borrow_mut()
      .insert(window.id(), app.id());
    self.announce(&window, workspace);
    window
  }

  /// Open a window the window tracker can't attribute to an app.
  pub(crate) fn open_untracked_window(&self, workspace: u32, title: &str, pid: Option<u32>) -> FakeWindow {
    let window = self.create_window(workspace, title, pid, |_| {});
    self.announce(&window, workspace);
    window
  }

  fn create_window(
    &self,
    workspace: u32,
    title: &str,
    pid: Option<u32>,
    adjust: impl FnOnce(&mut WindowInfo),
  ) -> FakeWindow {
    let id = WindowId(self.state.next_window.get() + 1);
    self.state.next_window.set(id.0);
    let mut info = WindowInfo {
      title: Some(title.to_owned()),
      workspace: Some(workspace),
      pid,
      ..WindowInfo::default()
    };
    adjust(&mut info);
    let window = FakeWindow::new(id, info);
    *window.state.shell.borrow_mut() = Rc::downgrade(&self.state);
    window
  }

  fn announce(&self, window: &FakeWindow, workspace: u32) {
    self.state.windows.borrow_mut().push(window.clone());
    match self.state.workspace(workspace) {
      Some(ws) => ws.insert(window),
      None => panic!("no workspace {workspace}"),
    }
  }

  pub(crate) fn map_pid(&self, pid: u32, app: &FakeApp) {
    self.state.pids.borrow_mut().insert(pid, app.id());
  }

  pub(crate) fn set_interesting(&self, window: &FakeWindow, interesting: bool) {
    let mut set = self.state.uninteresting.borrow_mut();
    if interesting {
      set.remove(&window.id());
    } else {
      set.insert(window.id());
    }
  }

  /// Remove a window from its workspace and destroy it.
  pub(crate) fn close_window(&self, window: &FakeWindow) {
    self.state.remove_window(window);
  }

  /// Append a workspace. Returns its index.
  pub(crate) fn add_workspace(&self) -> u32 {
    let index = u32::try_from(self.state.workspaces.borrow().len()).unwrap();
    self.state.workspaces.borrow_mut().push(FakeWorkspace::new(index));
    fire(&self.state.changed);
    index
  }

  pub(crate) fn switch_to(&self, index: u32) {
    self.state.active.set(index);
    fire(&self.state.switched);
  }

  /// Give a window the input focus.
  pub(crate) fn focus(&self, window: &FakeWindow) {
    self.state.focus_window(window);
  }

  pub(crate) fn workspace_listener_count(&self) -> usize {
    self
      .state
      .workspaces
      .borrow()
      .iter()
      .map(FakeWorkspace::listener_count)
      .sum()
  }

  /// Workspace-switched, workspaces-changed and focus listeners.
  pub(crate) fn shell_listener_count(&self) -> usize {
    self.state.switched.len() + self.state.changed.len() + self.state.focus.len()
  }
}

impl Shell for FakeShell {
  type Window = FakeWindow;
  type App = FakeApp;
  type Workspace = FakeWorkspace;

  fn workspaces(&self) -> Vec<FakeWorkspace> {
    self.state.workspaces.borrow().clone()
  }

  fn active_workspace_index(&self) -> u32 {
    self.state.active.get()
  }

  fn window_app(&self, window: &FakeWindow) -> Option<FakeApp> {
    let id = self.state.window_apps.borrow().get(&window.id()).cloned()?;
    self.state.app(&id)
  }

  fn app_from_pid(&self, pid: u32) -> Option<FakeApp> {
    let id = self.state.pids.borrow().get(&pid).cloned()?;
    self.state.app(&id)
  }

  fn lookup_app(&self, id: &AppId) -> Option<FakeApp> {
    self.state.app(id)
  }

  fn is_interesting(&self, window: &FakeWindow) -> bool {
    !self.state.uninteresting.borrow().contains(&window.id())
  }

  fn on_workspace_switched(&self, callback: Callback) -> Subscription {
    let id = self.state.switched.add(Rc::from(callback));
    subscription(&self.state, move |s| s.switched.remove(id))
  }

  fn on_workspaces_changed(&self, callback: Callback) -> Subscription {
    let id = self.state.changed.add(Rc::from(callback));
    subscription(&self.state, move |s| s.changed.remove(id))
  }

  fn on_focus_app_changed(&self, callback: Callback) -> Subscription {
    let id = self.state.focus.add(Rc::from(callback));
    subscription(&self.state, move |s| s.focus.remove(id))
  }
}

// ============================================================================
// Harness
// ============================================================================

/// A started window list over a two-workspace `FakeShell`.
pub(crate) struct Harness {
  pub(crate) shell: FakeShell,
  pub(crate) settings: MemorySettings,
  pub(crate) scheduler: FakeScheduler,
  pub(crate) list: WindowList<FakeShell>,
  pub(crate) events: async_broadcast::Receiver<Event>,
}

impl Harness {
  pub(crate) fn started() -> Self {
    Self::with_builder(WindowList::<FakeShell>::builder())
  }

  pub(crate) fn with_builder(builder: WindowListBuilder) -> Self {
    Self::start(builder, FakeShell::new(2), MemorySettings::new())
  }

  /// Start over an existing shell, e.g. one with windows already open,
  /// with settings already stored.
  pub(crate) fn with_shell(shell: FakeShell, config: &Config) -> Self {
    Self::start(
      WindowList::<FakeShell>::builder(),
      shell,
      MemorySettings::from_config(config),
    )
  }

  fn start(builder: WindowListBuilder, shell: FakeShell, settings: MemorySettings) -> Self {
    let scheduler = FakeScheduler::new();
    let mut list = builder.build(shell.clone(), settings.clone(), scheduler.clone());
    let events = list.subscribe();
    list.start();
    Self {
      shell,
      settings,
      scheduler,
      list,
      events,
    }
  }

  /// Write a setting the way an external settings editor would.
  pub(crate) fn set_setting(&self, key: SettingKey, value: Value) {
    self.settings.set(key, value).unwrap();
  }

  pub(crate) fn stored(&self, key: SettingKey) -> Option<Value> {
    self.settings.get(key)
  }

  /// Earliest-created button of an app.
  pub(crate) fn button_of(&self, app: &str) -> ButtonId {
    *self
      .list
      .buttons_for_app(&AppId::from(app))
      .first()
      .unwrap_or_else(|| panic!("no button for {app}"))
  }

  pub(crate) fn app_of(&self, id: ButtonId) -> String {
    self
      .list
      .registry
      .button(id)
      .map(|b| b.app_id.as_str().to_owned())
      .unwrap_or_else(|| panic!("no button {id}"))
  }

  /// Fire every pending hover delay and handle the resulting signals.
  pub(crate) fn run_timers(&mut self) {
    self.scheduler.run_all();
    self.list.process_pending();
  }

  /// Events published since the last drain.
  pub(crate) fn drain_events(&mut self) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = self.events.try_recv() {
      events.push(event);
    }
    events
  }
}

/// Window ids of every button, in visual order.
pub(crate) fn window_sets(list: &WindowList<FakeShell>) -> Vec<Vec<WindowId>> {
  list
    .order()
    .iter()
    .filter_map(|&id| list.button_windows(id))
    .collect()
}

/// The pin list as plain strings.
pub(crate) fn pin_ids(list: &WindowList<FakeShell>) -> Vec<String> {
  list
    .pin_list()
    .ids()
    .iter()
    .map(|id| id.as_str().to_owned())
    .collect()
}
