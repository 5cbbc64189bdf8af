#[cfg(test)]
mod dispatch;
#[cfg(test)]
mod wire;
