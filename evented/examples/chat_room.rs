/// 聊天室示例
/// 展示宿主组合（#[evented]）、一次性监听器、重入触发，以及超过上限时的 tracing 告警
use anyhow::Result as AnyResult;
use evented::{EventEmitter, Evented, Listener, Token, evented};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
enum RoomEvent {
    Joined(String),
    Said { from: String, text: String },
}

// ============================================================================
// 宿主类型：ChatRoom 自身的字段与构造函数保持不变
// ============================================================================

#[evented(args = RoomEvent)]
struct ChatRoom {
    topic: String,
}

impl ChatRoom {
    fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            emitter: EventEmitter::new(),
        }
    }

    fn join(&self, who: &str) -> AnyResult<()> {
        self.emit("joined", &RoomEvent::Joined(who.to_string()))?;
        Ok(())
    }

    fn say(&self, from: &str, text: &str) -> AnyResult<()> {
        self.emit(
            "said",
            &RoomEvent::Said {
                from: from.to_string(),
                text: text.to_string(),
            },
        )?;
        Ok(())
    }
}

fn main() -> AnyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let room = ChatRoom::new("rust");
    let closing = Token::with_description("closing");

    // 打印所有发言
    room.on(
        "said",
        Listener::new(|_, event: &RoomEvent| {
            if let RoomEvent::Said { from, text } = event {
                println!("<{from}> {text}");
            }
            Ok(())
        }),
    );

    // 第一位加入者收到欢迎语；欢迎语本身通过重入 emit 发出
    room.once(
        "joined",
        Listener::new(|this: &EventEmitter<RoomEvent>, event: &RoomEvent| {
            if let RoomEvent::Joined(who) = event {
                this.emit(
                    "said",
                    &RoomEvent::Said {
                        from: "bot".into(),
                        text: format!("welcome, {who}! you are the first one here"),
                    },
                )?;
            }
            Ok(())
        }),
    );

    room.on(
        &closing,
        Listener::new(|_, _| {
            println!("* room is closing");
            Ok(())
        }),
    );

    room.join("alice")?;
    room.join("bob")?;
    room.say("alice", "hi bob")?;

    // 上限为 1：第二个 "said" 监听器会触发一次 tracing 告警
    room.set_max_listeners(1).on("said", Listener::new(|_, _| Ok(())));

    println!("topic: {}, events: {:?}", room.topic, room.event_names());
    room.emit(&closing, &RoomEvent::Joined(String::new()))?;

    Ok(())
}
