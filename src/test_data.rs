#[cfg(test)]
pub const POST_DATA: &str = "How to be a great software engineer?

Someone asked me this question today and I didn't have an answer.
After thinking for a while, I came up with a list of what I try to do myself.

    Disclaimer: I don't think I am a great engineer,
    but I would love to have listened to that myself when I started.

<b>Tags & markup</b> stay as text.
";
