//! Test doubles for the GPU and window layers.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::core::{Backend, Session};
use crate::device::{
    BootstrapError, BufferUsage, ContextConfig, Extent, FrameSurface, GpuApi, ShaderStage,
    SurfaceError, Topology, VertexAttrib,
};
use crate::paint::Color;

/// One recorded GPU call. Handles are the ids handed out by [`RecordingGpu`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    ArrayBufferData { len: usize, usage: BufferUsage },
    DeleteBuffer(u32),
    VertexAttribPointer(VertexAttrib),
    EnableVertexAttribArray(u32),
    Viewport(i32, i32, i32, i32),
    ClearColor(Color),
    Clear,
    DrawArrays(Topology, i32, i32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Kind {
    Shader,
    Program,
    VertexArray,
    Buffer,
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
    next_id: u32,
    live: BTreeMap<u32, Kind>,
    double_deletes: usize,

    shader_stages: BTreeMap<u32, ShaderStage>,
    shader_sources: Vec<(ShaderStage, String)>,

    bound_vao: Option<u32>,
    bound_buffer: Option<u32>,
    attrib_bindings: Vec<(Option<u32>, Option<u32>)>,
    uploaded: Vec<u8>,

    fail_compile: Option<(ShaderStage, String)>,
    fail_link: Option<String>,
    fail_buffer: Option<String>,
}

impl Recorder {
    fn create(&mut self, kind: Kind) -> u32 {
        self.next_id += 1;
        self.live.insert(self.next_id, kind);
        self.next_id
    }

    fn delete(&mut self, id: u32, kind: Kind) {
        match self.live.get(&id) {
            Some(k) if *k == kind => {
                self.live.remove(&id);
            }
            _ => self.double_deletes += 1,
        }
    }
}

/// [`GpuApi`] that records calls and tracks object lifetimes.
///
/// Clones share state, so a test can keep a handle while the code under test
/// owns another.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingGpu {
    inner: Rc<RefCell<Recorder>>,
}

impl RecordingGpu {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_compile(&self, stage: ShaderStage, log: &str) {
        self.inner.borrow_mut().fail_compile = Some((stage, log.to_string()));
    }

    pub(crate) fn fail_link(&self, log: &str) {
        self.inner.borrow_mut().fail_link = Some(log.to_string());
    }

    pub(crate) fn fail_buffer(&self, reason: &str) {
        self.inner.borrow_mut().fail_buffer = Some(reason.to_string());
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.inner.borrow_mut().calls.clear();
    }

    /// Ids of objects created and not yet deleted, ascending.
    pub(crate) fn live_objects(&self) -> Vec<u32> {
        self.inner.borrow().live.keys().copied().collect()
    }

    /// Deletes of ids that were not live (already deleted or never created).
    pub(crate) fn double_deletes(&self) -> usize {
        self.inner.borrow().double_deletes
    }

    pub(crate) fn shader_sources(&self) -> Vec<(ShaderStage, String)> {
        self.inner.borrow().shader_sources.clone()
    }

    /// `(vertex array, array buffer)` bound at each attribute registration.
    pub(crate) fn attrib_bindings(&self) -> Vec<(Option<u32>, Option<u32>)> {
        self.inner.borrow().attrib_bindings.clone()
    }

    pub(crate) fn current_bindings(&self) -> (Option<u32>, Option<u32>) {
        let r = self.inner.borrow();
        (r.bound_vao, r.bound_buffer)
    }

    pub(crate) fn uploaded_bytes(&self) -> Vec<u8> {
        self.inner.borrow().uploaded.clone()
    }

    fn record(&self, call: Call) {
        self.inner.borrow_mut().calls.push(call);
    }
}

impl GpuApi for RecordingGpu {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let mut r = self.inner.borrow_mut();
        let id = r.create(Kind::Shader);
        r.shader_stages.insert(id, stage);
        r.calls.push(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        let mut r = self.inner.borrow_mut();
        if let Some(stage) = r.shader_stages.get(&shader).copied() {
            r.shader_sources.push((stage, source.to_string()));
        }
        r.calls.push(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        let r = self.inner.borrow();
        match (&r.fail_compile, r.shader_stages.get(&shader)) {
            (Some((failing, _)), Some(stage)) => failing != stage,
            _ => true,
        }
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        let r = self.inner.borrow();
        r.fail_compile
            .as_ref()
            .map(|(_, log)| log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        let mut r = self.inner.borrow_mut();
        r.delete(shader, Kind::Shader);
        r.calls.push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut r = self.inner.borrow_mut();
        let id = r.create(Kind::Program);
        r.calls.push(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        self.inner.borrow().fail_link.is_none()
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.inner.borrow().fail_link.clone().unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        let mut r = self.inner.borrow_mut();
        r.delete(program, Kind::Program);
        r.calls.push(Call::DeleteProgram(program));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let mut r = self.inner.borrow_mut();
        let id = r.create(Kind::VertexArray);
        r.calls.push(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        let mut r = self.inner.borrow_mut();
        r.bound_vao = vertex_array;
        r.calls.push(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        let mut r = self.inner.borrow_mut();
        r.delete(vertex_array, Kind::VertexArray);
        r.calls.push(Call::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let mut r = self.inner.borrow_mut();
        if let Some(reason) = r.fail_buffer.clone() {
            return Err(reason);
        }
        let id = r.create(Kind::Buffer);
        r.calls.push(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        let mut r = self.inner.borrow_mut();
        r.bound_buffer = buffer;
        r.calls.push(Call::BindArrayBuffer(buffer));
    }

    fn array_buffer_data(&self, data: &[u8], usage: BufferUsage) {
        let mut r = self.inner.borrow_mut();
        r.uploaded = data.to_vec();
        r.calls.push(Call::ArrayBufferData {
            len: data.len(),
            usage,
        });
    }

    fn delete_buffer(&self, buffer: u32) {
        let mut r = self.inner.borrow_mut();
        r.delete(buffer, Kind::Buffer);
        r.calls.push(Call::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(&self, attrib: VertexAttrib) {
        let mut r = self.inner.borrow_mut();
        let bound = (r.bound_vao, r.bound_buffer);
        r.attrib_bindings.push(bound);
        r.calls.push(Call::VertexAttribPointer(attrib));
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(Call::EnableVertexAttribArray(location));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&self, color: Color) {
        self.record(Call::ClearColor(color));
    }

    fn clear_color_buffer(&self) {
        self.record(Call::Clear);
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        self.record(Call::DrawArrays(topology, first, count));
    }
}

/// [`FrameSurface`] driven by a script instead of a window.
#[derive(Debug)]
pub(crate) struct ScriptedSurface {
    size: Extent,
    close_after_polls: usize,
    polls: usize,
    swaps: usize,
    resize_on_poll: Option<(usize, Extent)>,
    fail_swap_at: Option<usize>,
    shutdowns: Rc<Cell<usize>>,
}

impl ScriptedSurface {
    /// Reports a close request once `polls` event polls have happened.
    pub(crate) fn closing_after(polls: usize) -> Self {
        Self {
            size: Extent::new(800, 800),
            close_after_polls: polls,
            polls: 0,
            swaps: 0,
            resize_on_poll: None,
            fail_swap_at: None,
            shutdowns: Rc::new(Cell::new(0)),
        }
    }

    /// Reports `extent` from the `poll`-th poll (1-based).
    pub(crate) fn resize_on_poll(mut self, poll: usize, extent: Extent) -> Self {
        self.resize_on_poll = Some((poll, extent));
        self
    }

    /// Fails the `swap`-th swap (1-based).
    pub(crate) fn fail_swap_at(mut self, swap: usize) -> Self {
        self.fail_swap_at = Some(swap);
        self
    }

    pub(crate) fn polls(&self) -> usize {
        self.polls
    }

    pub(crate) fn swaps(&self) -> usize {
        self.swaps
    }
}

impl FrameSurface for ScriptedSurface {
    fn size(&self) -> Extent {
        self.size
    }

    fn should_close(&self) -> bool {
        self.polls >= self.close_after_polls
    }

    fn swap_buffers(&mut self) -> Result<(), SurfaceError> {
        self.swaps += 1;
        if self.fail_swap_at == Some(self.swaps) {
            return Err(SurfaceError::Swap("surface lost".into()));
        }
        Ok(())
    }

    fn poll_events(&mut self) -> Option<Extent> {
        self.polls += 1;
        match self.resize_on_poll {
            Some((poll, extent)) if poll == self.polls && !extent.is_empty() => {
                self.size = extent;
                Some(extent)
            }
            _ => None,
        }
    }

    fn shutdown(self) {
        self.shutdowns.set(self.shutdowns.get() + 1);
    }
}

/// [`Backend`] handing out a shared [`RecordingGpu`] and a scripted surface.
#[derive(Debug)]
pub(crate) struct MockBackend {
    gpu: RecordingGpu,
    fail_window: bool,
    close_after_polls: usize,
    fail_swap_at: Option<usize>,
    shutdowns: Rc<Cell<usize>>,
}

impl MockBackend {
    pub(crate) fn closing_after(polls: usize) -> Self {
        Self {
            gpu: RecordingGpu::new(),
            fail_window: false,
            close_after_polls: polls,
            fail_swap_at: None,
            shutdowns: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn failing_window() -> Self {
        Self {
            fail_window: true,
            ..Self::closing_after(0)
        }
    }

    pub(crate) fn fail_swap_at(mut self, swap: usize) -> Self {
        self.fail_swap_at = Some(swap);
        self
    }

    pub(crate) fn gpu(&self) -> RecordingGpu {
        self.gpu.clone()
    }

    pub(crate) fn shutdowns(&self) -> usize {
        self.shutdowns.get()
    }
}

impl Backend for MockBackend {
    type Api = RecordingGpu;
    type Surface = ScriptedSurface;

    fn open(
        &mut self,
        config: &ContextConfig,
    ) -> Result<Session<RecordingGpu, ScriptedSurface>, BootstrapError> {
        if self.fail_window {
            return Err(BootstrapError::WindowCreation(format!(
                "simulated failure for {}x{} window",
                config.width, config.height
            )));
        }

        let mut surface = ScriptedSurface::closing_after(self.close_after_polls);
        surface.size = Extent::new(config.width, config.height);
        surface.fail_swap_at = self.fail_swap_at;
        surface.shutdowns = Rc::clone(&self.shutdowns);

        Ok(Session {
            api: self.gpu.clone(),
            surface,
        })
    }
}
