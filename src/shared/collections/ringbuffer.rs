/// 有界覆盖式环形缓冲区（Bounded RingBuffer）
///
/// 为"最近订单"缓存设计的固定容量队列：
/// - 预分配固定容量，写满后覆盖最旧元素
/// - O(1) 入队，淘汰最旧元素时同样 O(1)
/// - 按插入顺序（从旧到新）迭代
/// - 不含内部锁，由持有者负责同步
///
/// # 使用场景
///
/// ```text
/// capacity = 3
/// push(A) push(B) push(C) → [A, B, C]
/// push(D)                 → [B, C, D]  (A 被淘汰)
/// ```

/// 有界环形缓冲区
pub struct RingBuffer<T> {
    /// 底层存储（预分配）
    buffer: Box<[Option<T>]>,

    /// 容量（固定）
    capacity: usize,

    /// 头指针（最旧元素位置）
    head: usize,

    /// 当前元素数量
    len: usize,
}

impl<T> RingBuffer<T> {
    /// 创建指定容量的RingBuffer
    ///
    /// # Panics
    /// 容量为0时panic
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        let buffer = (0..capacity)
            .map(|_| None)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            buffer,
            capacity,
            head: 0,
            len: 0,
        }
    }

    /// 入队（添加到尾部）
    ///
    /// # 返回
    /// - `None`: 未满，直接写入
    /// - `Some(oldest)`: 已满，最旧元素被淘汰并返回
    #[inline]
    pub fn push_overwrite(&mut self, value: T) -> Option<T> {
        if self.len < self.capacity {
            let tail = (self.head + self.len) % self.capacity;
            self.buffer[tail] = Some(value);
            self.len += 1;
            return None;
        }

        // 已满时尾部位置与头部重合
        let evicted = self.buffer[self.head].replace(value);
        self.head = (self.head + 1) % self.capacity;
        evicted
    }

    /// 查看最旧元素（不移除）
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    /// 查看最新元素（不移除）
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        let last = (self.head + self.len - 1) % self.capacity;
        self.buffer[last].as_ref()
    }

    /// 获取当前元素数量
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// 检查是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 检查是否已满
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    /// 获取容量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 按插入顺序迭代（从旧到新）
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            offset: 0,
        }
    }
}

/// 只读迭代器
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.buffer.len {
            let index = (self.buffer.head + self.offset) % self.buffer.capacity;
            self.offset += 1;
            if let Some(value) = self.buffer.buffer[index].as_ref() {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
