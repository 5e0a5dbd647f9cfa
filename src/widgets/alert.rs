use hypertext::prelude::*;

pub struct NoticeAlert<S> {
    pub msg: S,
}

impl<S: ToString> Renderable for NoticeAlert<S> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud!({
            div class="alert" role="alert" {
                (self.msg.to_string())
            }
        })
        .render_to(buffer);
    }
}
